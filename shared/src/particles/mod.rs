//! Fixed-capacity particle pools for the weather and wake effects.
//!
//! All four systems (rain, snow, sea spray, ship wake) share one storage
//! scheme: a pre-allocated slot buffer that is never resized after
//! construction. Inactive slots are parked at [`OFFSCREEN_Y`] with zero
//! alpha instead of being removed, so the per-frame update never allocates
//! and never changes the buffer length.
//!
//! The systems differ in how slots are claimed:
//! - rain and snow keep every slot permanently live and teleport fallen
//!   particles back above the ship (`rain`, `snow`);
//! - sea spray scans for a free slot and skips the spawn when the pool is
//!   saturated (`spray`);
//! - the wake always overwrites the next slot in round-robin order,
//!   regardless of whether it is still live (`wake`).

pub mod rain;
pub mod snow;
pub mod spray;
pub mod wake;

pub use rain::RainCurtain;
pub use snow::SnowDrift;
pub use spray::SeaSpray;
pub use wake::ShipWake;

use bevy::math::Vec3;

use crate::constants::OFFSCREEN_Y;

/// One slot of a particle pool.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining life in seconds; `<= 0.0` marks the slot recyclable.
    pub lifetime: f32,
    pub alpha: f32,
    pub size: f32,
}

impl Particle {
    /// An inactive slot, parked off-screen.
    pub fn inactive() -> Self {
        Self {
            position: Vec3::new(0.0, OFFSCREEN_Y, 0.0),
            velocity: Vec3::ZERO,
            lifetime: 0.0,
            alpha: 0.0,
            size: 0.0,
        }
    }

    pub fn is_live(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Park this slot off-screen and make it recyclable.
    pub fn deactivate(&mut self) {
        self.position.y = OFFSCREEN_Y;
        self.lifetime = 0.0;
        self.alpha = 0.0;
    }
}

/// Fixed-capacity slot buffer with the two claiming strategies used by the
/// effect systems.
#[derive(Debug)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    cursor: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::inactive(); capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Particle] {
        &mut self.slots
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_live()).count()
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.is_live())
    }

    /// Single scan for a recyclable slot. Used by pressure-intolerant
    /// systems (sea spray), which give up when the pool is saturated.
    pub fn find_free(&self) -> Option<usize> {
        self.slots.iter().position(|p| !p.is_live())
    }

    /// Advance the monotonic write cursor and return the slot it passed.
    /// The wake claims slots this way only, so under pressure the oldest
    /// particle is overwritten without any scan.
    pub fn overwrite_next(&mut self) -> usize {
        let index = self.cursor % self.slots.len();
        self.cursor += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pool_is_fully_recyclable() {
        let pool = ParticlePool::new(8);
        assert_eq!(pool.capacity(), 8);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.find_free(), Some(0));
    }

    #[test]
    fn find_free_skips_live_slots() {
        let mut pool = ParticlePool::new(4);
        pool.slots_mut()[0].lifetime = 1.0;
        pool.slots_mut()[1].lifetime = 1.0;
        assert_eq!(pool.find_free(), Some(2));

        for slot in pool.slots_mut() {
            slot.lifetime = 1.0;
        }
        assert_eq!(pool.find_free(), None);
    }

    #[test]
    fn overwrite_cursor_wraps_without_scanning() {
        let mut pool = ParticlePool::new(3);
        for slot in pool.slots_mut() {
            slot.lifetime = 10.0;
        }
        let claimed: Vec<usize> = (0..7).map(|_| pool.overwrite_next()).collect();
        assert_eq!(claimed, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn deactivated_slot_is_parked_offscreen() {
        let mut particle = Particle {
            position: Vec3::new(1.0, 2.0, 3.0),
            velocity: Vec3::ONE,
            lifetime: 0.5,
            alpha: 0.7,
            size: 0.1,
        };
        particle.deactivate();
        assert!(!particle.is_live());
        assert_eq!(particle.position.y, crate::constants::OFFSCREEN_Y);
        assert_eq!(particle.alpha, 0.0);
    }
}
