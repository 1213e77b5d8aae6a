//! Snow drift: respawn-on-floor precipitation like rain, but with
//! horizontal drift, a wider catchment and a per-frame flutter term.

use bevy::math::{Vec2, Vec3};
use rand::Rng;

use crate::constants::{MAX_SNOW_PARTICLES, PRECIPITATION_FLOOR};

use super::{Particle, ParticlePool};

/// Horizontal side length of the respawn catchment, centered on the ship.
const CATCHMENT: f32 = 40.0;
/// Top of the initial spawn volume and base height of respawns.
const SPAWN_TOP: f32 = 25.0;

#[derive(Debug)]
pub struct SnowDrift {
    pool: ParticlePool,
}

impl SnowDrift {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut pool = ParticlePool::new(MAX_SNOW_PARTICLES);
        for slot in pool.slots_mut() {
            *slot = Particle {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * CATCHMENT,
                    rng.gen::<f32>() * SPAWN_TOP,
                    (rng.gen::<f32>() - 0.5) * CATCHMENT,
                ),
                // x/z drift plus fall speed on y (positive, applied downward).
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 0.03,
                    rng.gen::<f32>() * 0.05 + 0.05,
                    (rng.gen::<f32>() - 0.5) * 0.03,
                ),
                lifetime: f32::INFINITY,
                alpha: 0.8,
                size: 0.1,
            };
        }
        Self { pool }
    }

    /// `elapsed` feeds the flutter term, which is indexed per particle so
    /// neighbouring flakes do not sway in lockstep.
    pub fn update(&mut self, dt: f32, elapsed: f32, ship_xz: Vec2, rng: &mut impl Rng) {
        for (index, slot) in self.pool.slots_mut().iter_mut().enumerate() {
            slot.position.x += slot.velocity.x * dt * 60.0;
            slot.position.y -= slot.velocity.y * dt * 60.0;
            slot.position.z += slot.velocity.z * dt * 60.0;
            if slot.position.y < PRECIPITATION_FLOOR {
                slot.position.x = ship_xz.x + (rng.gen::<f32>() - 0.5) * CATCHMENT;
                slot.position.y = SPAWN_TOP + rng.gen::<f32>() * 10.0;
                slot.position.z = ship_xz.y + (rng.gen::<f32>() - 0.5) * CATCHMENT;
            }
            slot.position.x += (elapsed + index as f32).sin() * 0.01;
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
    fn flakes_stay_near_the_ship_column() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut snow = SnowDrift::new(&mut rng);
        let ship = Vec2::ZERO;

        let mut elapsed = 0.0;
        for _ in 0..2000 {
            elapsed += 0.016;
            snow.update(0.016, elapsed, ship, &mut rng);
        }
        assert_eq!(snow.particles().len(), MAX_SNOW_PARTICLES);
        for p in snow.particles() {
            assert!(p.position.y >= PRECIPITATION_FLOOR);
            // Drift (±0.03·60·dt) and flutter (±0.01 per frame) move flakes
            // a bounded distance off the respawn catchment between floors.
            assert!(p.position.x.abs() < CATCHMENT * 1.5, "{}", p.position.x);
            assert!(p.position.z.abs() < CATCHMENT * 1.5, "{}", p.position.z);
        }
    }

    #[test]
    fn flutter_displaces_even_a_windless_flake() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut snow = SnowDrift::new(&mut rng);
        let before = snow.particles()[0].position.x;
        // dt = 0 freezes drift and fall; only the flutter term moves x.
        snow.update(0.0, 1.0, Vec2::ZERO, &mut rng);
        let after = snow.particles()[0].position.x;
        assert!((after - before).abs() > 0.0);
        assert!((after - before).abs() <= 0.01 + 1e-6);
    }
}
