//! Scene building
//!
//! Turns the simulation state into a flat triangle list, back to front.
//! Pure CPU-side code, so it gets the unit tests the GPU path can't have.

use glam::Vec2;

use super::shapes::{centered_quad, gradient_quad, hsl, quad, rotated_quad};
use super::vertex::{colors, Vertex};
use crate::consts::*;
use crate::settings::QualityPreset;
use crate::sim::World;

/// Build the full frame vertex list for the current state
pub fn build_scene(world: &World, quality: QualityPreset) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(estimate(world));
    let field = Vec2::new(world.bounds.width, world.bounds.height);

    // Sky gradient behind everything
    verts.extend(gradient_quad(
        Vec2::ZERO,
        field,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));

    if quality.starfield_enabled() {
        for star in &world.stars {
            let alpha = (star.size / STAR_SIZE_MAX).clamp(0.0, 1.0);
            verts.extend(quad(
                star.pos,
                Vec2::splat(star.size),
                colors::with_alpha(colors::STAR, alpha),
            ));
        }
    }

    // Player ship, green while rapid fire is active
    let ship_color = if world.player.powerup_active {
        colors::SHIP_POWERED
    } else {
        colors::SHIP
    };
    let ship_center = world.player.pos + PLAYER_SIZE / 2.0;
    if quality.glow_enabled() {
        verts.extend(centered_quad(
            ship_center,
            PLAYER_SIZE * 1.8,
            colors::with_alpha(ship_color, 0.15),
        ));
    }
    verts.extend(quad(world.player.pos, PLAYER_SIZE, ship_color));
    verts.extend(centered_quad(
        Vec2::new(ship_center.x, world.player.pos.y + 12.0),
        Vec2::new(12.0, 16.0),
        colors::COCKPIT,
    ));

    for projectile in &world.projectiles {
        if quality.glow_enabled() {
            verts.extend(centered_quad(
                projectile.pos + PROJECTILE_SIZE / 2.0,
                PROJECTILE_SIZE * 2.5,
                colors::with_alpha(colors::PROJECTILE, 0.25),
            ));
        }
        verts.extend(quad(projectile.pos, PROJECTILE_SIZE, colors::PROJECTILE));
    }

    for enemy in &world.enemies {
        verts.extend(quad(enemy.pos, ENEMY_SIZE, colors::ENEMY));
        verts.extend(centered_quad(
            enemy.pos + ENEMY_SIZE / 2.0,
            Vec2::new(24.0, 10.0),
            colors::ENEMY_CORE,
        ));
    }

    for powerup in &world.powerups {
        let center = powerup.pos + POWERUP_SIZE / 2.0;
        if quality.glow_enabled() {
            verts.extend(centered_quad(
                center,
                POWERUP_SIZE * 2.0,
                colors::with_alpha(colors::POWERUP, 0.2),
            ));
        }
        verts.extend(rotated_quad(
            center,
            POWERUP_SIZE,
            powerup.rotation,
            colors::POWERUP,
        ));
        // White cross spinning with the square
        verts.extend(rotated_quad(
            center,
            Vec2::new(POWERUP_SIZE.x * 0.6, 3.0),
            powerup.rotation,
            colors::POWERUP_CROSS,
        ));
        verts.extend(rotated_quad(
            center,
            Vec2::new(3.0, POWERUP_SIZE.y * 0.6),
            powerup.rotation,
            colors::POWERUP_CROSS,
        ));
    }

    // Newest particles win the render budget on Low
    let cap = quality.max_rendered_particles();
    let skip = world.particles.len().saturating_sub(cap);
    for particle in world.particles.iter().skip(skip) {
        let alpha = particle.life as f32 / PARTICLE_LIFETIME as f32;
        verts.extend(quad(
            particle.pos,
            Vec2::splat(particle.size),
            hsl(particle.hue, 1.0, 0.5, alpha),
        ));
    }

    verts
}

fn estimate(world: &World) -> usize {
    let quads = world.stars.len()
        + world.projectiles.len() * 2
        + world.enemies.len() * 2
        + world.powerups.len() * 4
        + world.particles.len()
        + 4;
    quads * 6
}
