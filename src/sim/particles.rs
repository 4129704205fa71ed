//! Jump-burst particle subsystem
//!
//! Particles are batch-emitted at the player's feet on every jump, drift
//! under their own weak gravity, fade out, and keep a bounded history of
//! past positions for the renderer's streak effect.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// A transient visual-trail entity
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Fractional opacity; the renderer drops negative values to zero
    pub alpha: f32,
    /// Opacity decay per tick, drawn once at construction and held constant
    fade: f32,
    /// Remaining lifetime in frames
    pub life: f32,
    /// Past positions, most recent last, capped at [`TRAIL_LENGTH`]
    pub trail: Vec<Vec2>,
}

impl Particle {
    fn new(origin: Vec2, rng: &mut Pcg32) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(
                rng.random_range(-0.5..0.5) * PARTICLE_SPEED,
                rng.random_range(-0.5..0.5) * PARTICLE_SPEED,
            ),
            size: PARTICLE_SIZE,
            alpha: 1.0,
            fade: 1.0 / rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
            life: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Advance one tick and record the new position in the trail
    fn update(&mut self) {
        self.vel.y += PARTICLE_GRAVITY;
        self.pos += self.vel;
        self.life -= 1.0;
        self.alpha -= self.fade;

        self.trail.push(self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }
}

/// Append `count` fresh particles at `origin`, each with independently
/// randomized velocity, lifetime and fade rate.
pub fn emit(particles: &mut Vec<Particle>, rng: &mut Pcg32, origin: Vec2, count: usize) {
    for _ in 0..count {
        particles.push(Particle::new(origin, rng));
    }
}

/// Advance every live particle exactly once, then retire expired ones.
///
/// Retirement happens after the full update pass, so removals never skip
/// or double-update a neighbor.
pub fn update(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.update();
    }
    particles.retain(|p| p.life > 0.0);
}
