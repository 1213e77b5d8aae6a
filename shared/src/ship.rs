//! Ship navigation along the fixed route.
//!
//! The navigator owns nothing but a progress scalar; position and
//! orientation are recomputed every frame from the wave field so the hull
//! pitches and rolls with the water it is drawn on.

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;

use crate::constants::{
    OCEAN_LEVEL, SHIP_BUOYANCY_OFFSET, SHIP_PATH_END, SHIP_PATH_START, SHIP_SPEED,
};
use crate::ocean::{wave_height, wave_normal, WaveParams};

/// Where the ship should be drawn this frame. Orientation is not stored:
/// the client builds it from `up` and `look_target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipPose {
    pub position: Vec3,
    pub up: Vec3,
    pub look_target: Vec3,
}

#[derive(Resource, Debug, Clone)]
pub struct ShipNavigator {
    path_start: Vec3,
    path_end: Vec3,
    speed: f32,
    progress: f32,
}

impl Default for ShipNavigator {
    fn default() -> Self {
        Self {
            path_start: SHIP_PATH_START,
            path_end: SHIP_PATH_END,
            speed: SHIP_SPEED,
            progress: 0.0,
        }
    }
}

impl ShipNavigator {
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advance along the path and derive the pose from the wave surface.
    pub fn advance(&mut self, dt: f32, elapsed: f32, waves: &WaveParams) -> ShipPose {
        self.progress += self.speed * dt;
        if self.progress > 1.0 {
            self.progress = 0.0;
        }

        let mut position = self.path_start.lerp(self.path_end, self.progress);
        position.y = OCEAN_LEVEL
            + wave_height(position.x, position.z, elapsed, waves)
            + SHIP_BUOYANCY_OFFSET;

        let up = wave_normal(position.x, position.z, elapsed, waves);
        let direction = (self.path_end - self.path_start).normalize();
        let mut look_target = position + direction;
        look_target.y = position.y + up.y * 0.5;

        ShipPose {
            position,
            up,
            look_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_wraps_past_the_path_end() {
        let mut navigator = ShipNavigator::default();
        let waves = WaveParams::default();
        // 0.02/s · 49 s keeps us under 1.0; one more second tips it over.
        navigator.advance(49.0, 0.0, &waves);
        assert!(navigator.progress() < 1.0);
        navigator.advance(2.0, 0.0, &waves);
        assert_eq!(navigator.progress(), 0.0);
    }

    #[test]
    fn pose_floats_on_the_modeled_surface() {
        let mut navigator = ShipNavigator::default();
        let waves = WaveParams::default();
        let elapsed = 1.3;
        let pose = navigator.advance(0.016, elapsed, &waves);
        let expected = OCEAN_LEVEL
            + wave_height(pose.position.x, pose.position.z, elapsed, &waves)
            + SHIP_BUOYANCY_OFFSET;
        assert!((pose.position.y - expected).abs() < 1e-6);
    }

    #[test]
    fn up_vector_is_the_surface_normal() {
        let mut navigator = ShipNavigator::default();
        let waves = WaveParams {
            amplitude: 0.4,
            frequency: 0.4,
            speed: 1.0,
        };
        let pose = navigator.advance(0.016, 0.7, &waves);
        let normal = wave_normal(pose.position.x, pose.position.z, 0.7, &waves);
        assert!((pose.up - normal).length() < 1e-6);
        assert!((pose.up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn look_target_leads_along_the_path() {
        let mut navigator = ShipNavigator::default();
        let waves = WaveParams::default();
        let pose = navigator.advance(0.016, 0.0, &waves);
        // The route runs +x, so the target sits one unit ahead on x.
        assert!((pose.look_target.x - (pose.position.x + 1.0)).abs() < 1e-6);
        assert!((pose.look_target.z - pose.position.z).abs() < 1e-6);
        assert!((pose.look_target.y - (pose.position.y + pose.up.y * 0.5)).abs() < 1e-6);
    }
}
