//! World construction parameters
//!
//! Bounds and seed are fixed at construction; everything else the sim
//! needs lives in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rectangular coordinate space entities move within.
/// Origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// Parameters for a new world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// RNG seed for reproducible runs
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            seed: 0,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self { width, height, seed }
    }

    /// Reject degenerate playfields before any entity math runs on them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield {
            width: self.width,
            height: self.height,
        }
    }
}

/// Rejected world configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidWidth(f32),
    InvalidHeight(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidWidth(w) => {
                write!(f, "playfield width must be positive and finite, got {w}")
            }
            ConfigError::InvalidHeight(h) => {
                write!(f, "playfield height must be positive and finite, got {h}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
