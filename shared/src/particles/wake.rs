//! Ship wake: a distance-triggered particle trail behind the hull.
//!
//! Emission is tied to ship displacement, not time: whenever the ship has
//! moved more than [`EMIT_THRESHOLD`] since the last emission, two particles
//! are dropped at a stern offset rotated into world space. The wake is the
//! only system that claims slots with the round-robin cursor, so under
//! pressure it silently overwrites its oldest particle instead of scanning.

use bevy::math::{Quat, Vec3};
use rand::Rng;

use crate::constants::MAX_WAKE_PARTICLES;

use super::{Particle, ParticlePool};

/// Ship displacement that triggers an emission.
const EMIT_THRESHOLD: f32 = 0.1;
/// Stern offset in ship-local space (slightly below deck, behind the hull).
const STERN_OFFSET: Vec3 = Vec3::new(0.0, -0.1, 0.6);
const INITIAL_ALPHA: f32 = 0.7;
const LIFETIME: f32 = 2.5;

#[derive(Debug)]
pub struct ShipWake {
    pool: ParticlePool,
    last_emit_position: Option<Vec3>,
}

impl ShipWake {
    pub fn new() -> Self {
        Self {
            pool: ParticlePool::new(MAX_WAKE_PARTICLES),
            last_emit_position: None,
        }
    }

    pub fn update(&mut self, dt: f32, ship_position: Vec3, ship_rotation: Quat, rng: &mut impl Rng) {
        let moved = match self.last_emit_position {
            Some(last) => ship_position.distance(last) > EMIT_THRESHOLD,
            None => true,
        };
        if moved {
            self.emit(ship_position, ship_rotation, rng);
            self.emit(ship_position, ship_rotation, rng);
            self.last_emit_position = Some(ship_position);
        }

        for slot in self.pool.slots_mut() {
            if !slot.is_live() {
                continue;
            }
            slot.lifetime -= dt;
            if slot.lifetime <= 0.0 {
                slot.alpha = 0.0;
                continue;
            }
            slot.alpha = INITIAL_ALPHA * (slot.lifetime / LIFETIME);
            // Slow horizontal dispersion of the foam.
            slot.position.x += (rng.gen::<f32>() - 0.5) * 0.01;
            slot.position.z += (rng.gen::<f32>() - 0.5) * 0.01;
        }
    }

    fn emit(&mut self, ship_position: Vec3, ship_rotation: Quat, rng: &mut impl Rng) {
        let emit_position = ship_position + ship_rotation * STERN_OFFSET;
        let index = self.pool.overwrite_next();
        self.pool.slots_mut()[index] = Particle {
            position: Vec3::new(
                emit_position.x + (rng.gen::<f32>() - 0.5) * 0.3,
                emit_position.y - 0.1,
                emit_position.z + (rng.gen::<f32>() - 0.5) * 0.3,
            ),
            velocity: Vec3::ZERO,
            lifetime: LIFETIME,
            alpha: INITIAL_ALPHA,
            size: rng.gen::<f32>() * 0.15 + 0.1,
        };
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.slots()
    }

    pub fn live_count(&self) -> usize {
        self.pool.live_count()
    }
}

impl Default for ShipWake {
    fn default() -> Self {
        Self::new()
    }
}
