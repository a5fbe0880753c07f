//! Enemy spawn pacing and drop rolls
//!
//! A tick accumulator measured against a shrinking interval implements the
//! difficulty ramp: enemies arrive every 60 ticks at first and every 20
//! ticks at full pressure.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, PowerUp};
use crate::consts::*;

/// Timed enemy production with a linear difficulty ramp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks since the last spawn
    accumulator: f32,
    /// Ticks between spawns, shrinking toward the floor
    interval_ticks: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            interval_ticks: SPAWN_INTERVAL_START,
        }
    }

    /// Current spawn interval in ticks
    pub fn interval_ticks(&self) -> f32 {
        self.interval_ticks
    }

    /// Count one tick; emits an enemy when the interval has elapsed.
    ///
    /// Each spawn tightens the interval by `SPAWN_INTERVAL_STEP`, never
    /// below the `SPAWN_INTERVAL_FLOOR` hard floor.
    pub fn advance(&mut self, playfield_width: f32, rng: &mut Pcg32) -> Option<Enemy> {
        self.accumulator += 1.0;
        if self.accumulator < self.interval_ticks {
            return None;
        }
        self.accumulator = 0.0;
        if self.interval_ticks > SPAWN_INTERVAL_FLOOR {
            self.interval_ticks =
                (self.interval_ticks - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_FLOOR);
        }

        // Spawn fully above the visible area, anywhere the ship fits
        let span = playfield_width - ENEMY_SIZE.x;
        let x = if span > 0.0 {
            rng.random_range(0.0..span)
        } else {
            0.0
        };
        let speed = rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
        Some(Enemy::new(Vec2::new(x, -ENEMY_SIZE.y), speed))
    }

    /// Chance-based power-up drop at the spot an enemy died
    pub fn roll_powerup(&self, pos: Vec2, rng: &mut Pcg32) -> Option<PowerUp> {
        if rng.random_bool(POWERUP_DROP_CHANCE) {
            Some(PowerUp::new(pos))
        } else {
            None
        }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_first_spawn_after_initial_interval() {
        let mut spawner = Spawner::new();
        let mut rng = rng();
        for _ in 0..59 {
            assert!(spawner.advance(800.0, &mut rng).is_none());
        }
        let enemy = spawner.advance(800.0, &mut rng).expect("spawn on tick 60");
        assert_eq!(enemy.pos.y, -ENEMY_SIZE.y);
        assert!(enemy.pos.x >= 0.0 && enemy.pos.x < 800.0 - ENEMY_SIZE.x);
        assert!(enemy.speed >= ENEMY_SPEED_MIN && enemy.speed < ENEMY_SPEED_MAX);
    }

    #[test]
    fn test_interval_ramps_down_to_floor() {
        let mut spawner = Spawner::new();
        let mut rng = rng();
        let mut last = spawner.interval_ticks();
        let mut spawned = 0u32;
        for _ in 0..20_000 {
            if spawner.advance(800.0, &mut rng).is_some() {
                spawned += 1;
                let now = spawner.interval_ticks();
                assert!(now <= last);
                assert!(now >= SPAWN_INTERVAL_FLOOR);
                last = now;
            }
        }
        // 80 spawns walk the interval from 60 to the floor
        assert!(spawned > 80);
        assert_eq!(spawner.interval_ticks(), SPAWN_INTERVAL_FLOOR);
    }

    #[test]
    fn test_narrow_playfield_spawns_at_left_edge() {
        let mut spawner = Spawner::new();
        let mut rng = rng();
        let mut enemy = None;
        for _ in 0..60 {
            enemy = spawner.advance(ENEMY_SIZE.x, &mut rng).or(enemy);
        }
        assert_eq!(enemy.expect("one spawn").pos.x, 0.0);
    }

    #[test]
    fn test_drop_rate_near_ten_percent() {
        let spawner = Spawner::new();
        let mut rng = rng();
        let drops = (0..10_000)
            .filter(|_| spawner.roll_powerup(Vec2::ZERO, &mut rng).is_some())
            .count();
        // Mean 1000, sigma ~30; the window is far outside noise
        assert!((800..1200).contains(&drops));
    }

    #[test]
    fn test_drop_lands_where_the_enemy_died() {
        let spawner = Spawner::new();
        let mut rng = rng();
        let pos = Vec2::new(123.0, 45.0);
        let drop = (0..1_000)
            .find_map(|_| spawner.roll_powerup(pos, &mut rng))
            .expect("a drop within 1000 rolls");
        assert_eq!(drop.pos, pos);
        assert_eq!(drop.rotation, 0.0);
    }
}
