//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [0.0, 0.667, 1.0, 1.0]; // #00aaff
    pub const SHIP_POWERED: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // #00ff00
    pub const COCKPIT: [f32; 4] = [0.75, 0.9, 1.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // #ffff00
    pub const ENEMY: [f32; 4] = [1.0, 0.267, 0.267, 1.0]; // #ff4444
    pub const ENEMY_CORE: [f32; 4] = [0.667, 0.0, 0.0, 1.0]; // #aa0000
    pub const POWERUP: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // #00ff00
    pub const POWERUP_CROSS: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SKY_TOP: [f32; 4] = [0.039, 0.039, 0.180, 1.0]; // #0a0a2e
    pub const SKY_BOTTOM: [f32; 4] = [0.086, 0.129, 0.243, 1.0]; // #16213e
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], alpha]
    }
}
