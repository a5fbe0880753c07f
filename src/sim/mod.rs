//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, oldest first)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod spawner;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use spawner::Spawner;
pub use state::{
    Enemy, GamePhase, Particle, Player, PowerUp, Projectile, Star, World, MAX_PARTICLES,
};
pub use tick::{tick, TickInput};
