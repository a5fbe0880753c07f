//! World state and core simulation types
//!
//! Everything a tick mutates lives here. All randomness flows through the
//! world's seeded RNG so runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::spawner::Spawner;
use crate::config::{ConfigError, Playfield, WorldConfig};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; only the restart input is honored
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Ticks until the next shot is allowed
    pub shoot_cooldown: u32,
    /// Rapid-fire buff active
    pub powerup_active: bool,
    /// Rapid-fire ticks remaining
    pub powerup_ticks: u32,
}

impl Player {
    /// Fresh ship, horizontally centered near the bottom edge
    pub fn spawn(bounds: &Playfield) -> Self {
        Self {
            pos: Vec2::new(
                (bounds.width - PLAYER_SIZE.x) / 2.0,
                bounds.height - PLAYER_BOTTOM_OFFSET,
            ),
            shoot_cooldown: 0,
            powerup_active: false,
            powerup_ticks: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_SIZE)
    }

    /// Step left, clamped at the playfield edge
    pub fn move_left(&mut self) {
        self.pos.x = (self.pos.x - PLAYER_SPEED).max(0.0);
    }

    /// Step right, clamped at the playfield edge
    pub fn move_right(&mut self, playfield_width: f32) {
        self.pos.x = (self.pos.x + PLAYER_SPEED).min(playfield_width - PLAYER_SIZE.x);
    }

    /// Advance the cooldown and power-up timers by one tick.
    ///
    /// Deactivation happens on the tick that finds the timer already at
    /// zero, so a pickup buys the buffed fire rate for exactly
    /// `POWERUP_DURATION` ticks.
    pub fn tick(&mut self) {
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        if self.powerup_active {
            if self.powerup_ticks > 0 {
                self.powerup_ticks -= 1;
            } else {
                self.powerup_active = false;
            }
        }
    }

    /// Fire if the cooldown allows it. Resets the cooldown only on success.
    pub fn try_shoot(&mut self) -> Option<Projectile> {
        if self.shoot_cooldown > 0 {
            return None;
        }
        self.shoot_cooldown = if self.powerup_active {
            SHOOT_COOLDOWN_POWERED
        } else {
            SHOOT_COOLDOWN
        };
        Some(Projectile::new(Vec2::new(
            self.pos.x + PLAYER_SIZE.x / 2.0 - PROJECTILE_SIZE.x / 2.0,
            self.pos.y,
        )))
    }

    /// Start (or refresh) the rapid-fire buff
    pub fn activate_powerup(&mut self) {
        self.powerup_active = true;
        self.powerup_ticks = POWERUP_DURATION;
    }
}

/// A player shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Vertical velocity per tick, negative = upward
    pub vel_y: f32,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel_y: -PROJECTILE_SPEED,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, PROJECTILE_SIZE)
    }

    pub fn tick(&mut self) {
        self.pos.y += self.vel_y;
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Fall speed per tick, fixed at spawn
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self { pos, speed }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, ENEMY_SIZE)
    }

    pub fn tick(&mut self) {
        self.pos.y += self.speed;
    }
}

/// A falling rapid-fire capsule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    /// Spin angle in radians, rendering only
    pub rotation: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, rotation: 0.0 }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, POWERUP_SIZE)
    }

    pub fn tick(&mut self) {
        self.pos.y += POWERUP_FALL_SPEED;
        self.rotation += POWERUP_SPIN;
    }
}

/// An explosion fragment (visual only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
    pub size: f32,
    /// Fire-palette hue in degrees, fixed at spawn
    pub hue: f32,
}

impl Particle {
    pub fn tick(&mut self) {
        self.pos += self.vel;
        self.vel *= PARTICLE_DRAG;
        self.life = self.life.saturating_sub(1);
    }
}

/// A background starfield dot. Never collides; survives restart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

/// Maximum particles kept alive at once
pub const MAX_PARTICLES: usize = 256;

/// Complete game state (deterministic given seed + input trace)
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield dimensions, fixed at construction
    pub bounds: Playfield,
    /// Current phase
    pub phase: GamePhase,
    pub score: u32,
    /// Derived from score every tick, never below 1
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Background decoration
    pub stars: Vec<Star>,
    /// Enemy pacing and drop rolls
    pub spawner: Spawner,
    /// All sim randomness flows through here
    #[serde(skip)]
    pub rng: Pcg32,
}

impl World {
    /// Create a new world. Rejects degenerate playfield bounds.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.playfield();
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let stars = starfield(&bounds, &mut rng);
        Ok(Self {
            seed: config.seed,
            bounds,
            phase: GamePhase::Running,
            score: 0,
            level: 1,
            time_ticks: 0,
            player: Player::spawn(&bounds),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            stars,
            spawner: Spawner::new(),
            rng,
        })
    }

    /// Reset for a new run. Gameplay state starts fresh; the starfield keeps
    /// drifting and the RNG stream continues.
    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.bounds);
        self.projectiles.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.particles.clear();
        self.spawner = Spawner::new();
        self.score = 0;
        self.level = 1;
        self.phase = GamePhase::Running;
    }

    /// Drift the starfield downward, wrapping to a fresh column at the top
    pub fn advance_stars(&mut self) {
        let Self {
            stars, rng, bounds, ..
        } = self;
        for star in stars.iter_mut() {
            star.pos.y += star.speed;
            if star.pos.y > bounds.height {
                star.pos.y = 0.0;
                star.pos.x = rng.random_range(0.0..bounds.width);
            }
        }
    }

    /// Burst of explosion particles at `center` 🎆
    pub fn spawn_explosion(&mut self, center: Vec2) {
        let Self { particles, rng, .. } = self;
        for _ in 0..PARTICLES_PER_EXPLOSION {
            if particles.len() >= MAX_PARTICLES {
                // Evict oldest to make room
                particles.remove(0);
            }
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * 10.0,
                (rng.random::<f32>() - 0.5) * 10.0,
            );
            particles.push(Particle {
                pos: center,
                vel,
                life: PARTICLE_LIFETIME,
                size: rng.random_range(2.0..6.0),
                hue: rng.random_range(15.0..75.0),
            });
        }
    }
}

fn starfield(bounds: &Playfield, rng: &mut Pcg32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| {
            let x = rng.random_range(0.0..bounds.width);
            let y = rng.random_range(0.0..bounds.height);
            let size = rng.random::<f32>() * STAR_SIZE_MAX;
            let speed = rng.random_range(STAR_SPEED_MIN..STAR_SPEED_MAX);
            Star {
                pos: Vec2::new(x, y),
                size,
                speed,
            }
        })
        .collect()
}
