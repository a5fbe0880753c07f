//! Nova Strike - A vertical-scroller arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `input`: Logical actions and held-key tracking
//! - `config`: Playfield bounds and run seeding

pub mod config;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, Playfield, WorldConfig};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    /// Horizontal movement per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Spawn height above the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
    /// Ticks between shots
    pub const SHOOT_COOLDOWN: u32 = 15;
    /// Ticks between shots while rapid fire is active
    pub const SHOOT_COOLDOWN_POWERED: u32 = 5;
    /// Rapid-fire duration in ticks (5 seconds)
    pub const POWERUP_DURATION: u32 = 300;

    /// Projectile
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(4.0, 10.0);
    /// Upward movement per tick
    pub const PROJECTILE_SPEED: f32 = 8.0;

    /// Enemy
    pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    /// Fall speed range, sampled per spawn
    pub const ENEMY_SPEED_MIN: f32 = 2.0;
    pub const ENEMY_SPEED_MAX: f32 = 4.0;
    /// Margin past the bottom edge before an enemy despawns
    pub const ENEMY_DESPAWN_MARGIN: f32 = 40.0;

    /// Enemy spawn pacing (ticks between spawns)
    pub const SPAWN_INTERVAL_START: f32 = 60.0;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 20.0;
    /// Interval shrink per spawn
    pub const SPAWN_INTERVAL_STEP: f32 = 0.5;

    /// Power-up capsule
    pub const POWERUP_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const POWERUP_FALL_SPEED: f32 = 2.0;
    /// Spin per tick (cosmetic only)
    pub const POWERUP_SPIN: f32 = 0.1;
    /// Drop chance per destroyed enemy
    pub const POWERUP_DROP_CHANCE: f64 = 0.1;
    pub const POWERUP_DESPAWN_MARGIN: f32 = 20.0;

    /// Explosion particles
    pub const PARTICLES_PER_EXPLOSION: usize = 10;
    pub const PARTICLE_LIFETIME: u32 = 30;
    /// Velocity decay per tick
    pub const PARTICLE_DRAG: f32 = 0.98;

    /// Background starfield
    pub const STAR_COUNT: usize = 100;
    pub const STAR_SPEED_MIN: f32 = 1.0;
    pub const STAR_SPEED_MAX: f32 = 3.0;
    pub const STAR_SIZE_MAX: f32 = 2.0;

    /// Scoring
    pub const SCORE_PER_ENEMY: u32 = 10;
    /// Score per level step
    pub const SCORE_PER_LEVEL: u32 = 100;
}

/// Level for a given score (level 1 at zero score)
#[inline]
pub fn level_for_score(score: u32) -> u32 {
    score / consts::SCORE_PER_LEVEL + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(99), 1);
        assert_eq!(level_for_score(100), 2);
        assert_eq!(level_for_score(250), 3);
    }
}
