//! Rain curtain: an infinite, ship-following precipitation volume.
//!
//! Every slot is permanently live. Particles fall at a fixed per-particle
//! speed and, on crossing the floor, are teleported back above the ship
//! inside a fixed horizontal catchment rather than being deactivated, so
//! the curtain follows the ship without any emission bookkeeping.

use bevy::math::{Vec2, Vec3};
use rand::Rng;

use crate::constants::{MAX_RAIN_PARTICLES, PRECIPITATION_FLOOR};

use super::{Particle, ParticlePool};

/// Horizontal side length of the respawn catchment, centered on the ship.
const CATCHMENT: f32 = 30.0;
/// Top of the initial spawn volume and base height of respawns.
const SPAWN_TOP: f32 = 20.0;

#[derive(Debug)]
pub struct RainCurtain {
    pool: ParticlePool,
}

impl RainCurtain {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut pool = ParticlePool::new(MAX_RAIN_PARTICLES);
        for slot in pool.slots_mut() {
            *slot = Particle {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * CATCHMENT,
                    rng.gen::<f32>() * SPAWN_TOP,
                    (rng.gen::<f32>() - 0.5) * CATCHMENT,
                ),
                // Only the fall speed matters; stored on y for reuse of the
                // common slot layout.
                velocity: Vec3::new(0.0, rng.gen::<f32>() * 0.3 + 0.2, 0.0),
                lifetime: f32::INFINITY,
                alpha: 0.6,
                size: 0.05,
            };
        }
        Self { pool }
    }

    pub fn update(&mut self, dt: f32, ship_xz: Vec2, rng: &mut impl Rng) {
        for slot in self.pool.slots_mut() {
            slot.position.y -= slot.velocity.y * dt * 60.0;
            if slot.position.y < PRECIPITATION_FLOOR {
                slot.position.x = ship_xz.x + (rng.gen::<f32>() - 0.5) * CATCHMENT;
                slot.position.y = SPAWN_TOP + rng.gen::<f32>() * 10.0;
                slot.position.z = ship_xz.y + (rng.gen::<f32>() - 0.5) * CATCHMENT;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.slots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn every_slot_is_permanently_live() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rain = RainCurtain::new(&mut rng);
        assert_eq!(rain.particles().len(), MAX_RAIN_PARTICLES);

        for _ in 0..600 {
            rain.update(0.016, Vec2::new(3.0, -2.0), &mut rng);
        }
        assert_eq!(rain.particles().len(), MAX_RAIN_PARTICLES);
        assert!(rain.particles().iter().all(|p| p.is_live()));
    }

    #[test]
    fn fallen_particles_respawn_over_the_ship() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rain = RainCurtain::new(&mut rng);
        let ship = Vec2::new(40.0, 40.0);

        // Long enough for even the slowest particle to cross the floor at
        // least once, so every slot has been recycled over the ship.
        for _ in 0..60 {
            rain.update(0.1, ship, &mut rng);
        }
        for p in rain.particles() {
            assert!(p.position.y >= PRECIPITATION_FLOOR);
            assert!((p.position.x - ship.x).abs() <= CATCHMENT / 2.0 + 1e-3);
            assert!((p.position.z - ship.y).abs() <= CATCHMENT / 2.0 + 1e-3);
        }
    }
}
