//! Wave field calculations for ship buoyancy and rendering.
//!
//! This module provides CPU-side wave calculations that exactly match the
//! GPU shader implementation (`client/src/shaders/ocean.wgsl`). The ship is
//! positioned and oriented from these functions, so any divergence between
//! the two would make the hull float above or cut through the visible
//! surface.
//!
//! ## Usage
//!
//! ```rust
//! use shared::ocean::{wave_height, WaveParams};
//!
//! let params = WaveParams::default();
//! let height = wave_height(10.0, 5.0, 0.5, &params);
//! ```

use bevy::math::Vec3;

/// Step used for the finite-difference normal estimate.
const NORMAL_SAMPLE_OFFSET: f32 = 0.01;

/// Wave uniforms shared by the CPU field and the ocean shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Height of the primary sinusoid; the secondary runs at half of it.
    pub amplitude: f32,
    /// Spatial frequency in radians per world unit.
    pub frequency: f32,
    /// Time multiplier for wave animation.
    pub speed: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 0.2,
            frequency: 0.3,
            speed: 1.0,
        }
    }
}

/// Height of the ocean surface above its rest level at (x, z).
///
/// Two sinusoids, identical to the vertex displacement in `ocean.wgsl`:
/// `sin(x·f + t·s)·a + cos(z·f·0.7 + t·s·0.8)·a·0.5`.
pub fn wave_height(x: f32, z: f32, time: f32, params: &WaveParams) -> f32 {
    let wave1 = (x * params.frequency + time * params.speed).sin() * params.amplitude;
    let wave2 =
        (z * params.frequency * 0.7 + time * params.speed * 0.8).cos() * params.amplitude * 0.5;
    wave1 + wave2
}

/// Unit surface normal at (x, z), estimated by central finite differencing.
///
/// Two tangents are built from height samples offset along x and z, and
/// their cross product gives the upward-facing normal.
pub fn wave_normal(x: f32, z: f32, time: f32, params: &WaveParams) -> Vec3 {
    let d = NORMAL_SAMPLE_OFFSET;
    let h_px = wave_height(x + d, z, time, params);
    let h_nx = wave_height(x - d, z, time, params);
    let h_pz = wave_height(x, z + d, time, params);
    let h_nz = wave_height(x, z - d, time, params);

    let tangent_x = Vec3::new(2.0 * d, h_px - h_nx, 0.0).normalize();
    let tangent_z = Vec3::new(0.0, h_pz - h_nz, 2.0 * d).normalize();
    tangent_z.cross(tangent_x).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_at_origin_matches_closed_form() {
        let params = WaveParams {
            amplitude: 0.2,
            frequency: 0.3,
            speed: 1.0,
        };
        // sin(0)·0.2 + cos(0)·0.1 = 0.1
        let height = wave_height(0.0, 0.0, 0.0, &params);
        assert!((height - 0.1).abs() < 1e-6);
    }

    #[test]
    fn height_varies_with_position_and_time() {
        let params = WaveParams::default();
        let h1 = wave_height(0.0, 0.0, 1.0, &params);
        let h2 = wave_height(5.0, 5.0, 1.0, &params);
        let h3 = wave_height(0.0, 0.0, 2.0, &params);
        assert!((h1 - h2).abs() > 1e-3, "height should vary with position");
        assert!((h1 - h3).abs() > 1e-3, "height should vary with time");
    }

    #[test]
    fn normal_is_unit_length() {
        let params = WaveParams::default();
        for &(x, z, t) in &[(0.0, 0.0, 0.0), (3.7, -2.1, 1.4), (-50.0, 50.0, 12.0)] {
            let normal = wave_normal(x, z, t, &params);
            assert!(
                (normal.length() - 1.0).abs() < 1e-5,
                "normal at ({x}, {z}, {t}) should be unit length"
            );
        }
    }

    #[test]
    fn normal_points_up_on_flat_water() {
        let params = WaveParams {
            amplitude: 0.0,
            frequency: 0.3,
            speed: 1.0,
        };
        let normal = wave_normal(4.0, -7.0, 2.0, &params);
        assert!((normal - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn normal_tilts_on_wave_slope() {
        let params = WaveParams {
            amplitude: 0.4,
            frequency: 0.4,
            speed: 1.0,
        };
        // On the forward slope of the primary sinusoid the normal leans
        // away from the travel direction.
        let normal = wave_normal(0.0, 0.0, 0.0, &params);
        assert!(normal.y > 0.9);
        assert!(normal.x.abs() > 1e-3);
    }
}
