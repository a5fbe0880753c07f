//! Shape generation for 2D primitives
//!
//! All coordinates are playfield space (origin top-left, y grows downward).
//! The pipeline flips to NDC at upload time.

use glam::Vec2;

use super::vertex::Vertex;

/// Axis-aligned quad from its top-left corner
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x, y) = (pos.x, pos.y);
    let (w, h) = (size.x, size.y);
    [
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Axis-aligned quad around a center point
pub fn centered_quad(center: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    quad(center - size / 2.0, size, color)
}

/// Quad rotated around its center
pub fn rotated_quad(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> [Vertex; 6] {
    let rot = Vec2::from_angle(angle);
    let half = size / 2.0;
    let corner = |c: Vec2| {
        let p = center + rot.rotate(c);
        Vertex::new(p.x, p.y, color)
    };

    let tl = corner(Vec2::new(-half.x, -half.y));
    let tr = corner(Vec2::new(half.x, -half.y));
    let bl = corner(Vec2::new(-half.x, half.y));
    let br = corner(Vec2::new(half.x, half.y));

    [tl, tr, bl, bl, tr, br]
}

/// Full-field quad with a vertical color gradient (top color fades into
/// bottom color)
pub fn gradient_quad(pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let (x, y) = (pos.x, pos.y);
    let (w, h) = (size.x, size.y);
    [
        Vertex::new(x, y, top),
        Vertex::new(x + w, y, top),
        Vertex::new(x, y + h, bottom),
        Vertex::new(x, y + h, bottom),
        Vertex::new(x + w, y, top),
        Vertex::new(x + w, y + h, bottom),
    ]
}

/// HSL to RGBA. Hue in degrees, saturation and lightness in 0-1.
pub fn hsl(h: f32, s: f32, l: f32, alpha: f32) -> [f32; 4] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m, alpha]
}
