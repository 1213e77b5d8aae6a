//! Weather kinds, their visual profiles and the switching state machine.
//!
//! A [`WeatherProfile`] is the complete, immutable bundle of rendering
//! parameters for one weather kind: sky fallback, water uniforms, fog,
//! light intensities, which particle system runs, whether the hull gets a
//! tint and whether icebergs spawn. The client applies a profile in one
//! atomic pass; this module only decides *what* to apply.
//!
//! [`WeatherState::request`] is the transition rule: switching to the
//! current weather is a no-op for every kind except Icy, which always
//! re-applies so a repeat selection re-rolls the iceberg field.

pub mod tint;

use std::fmt;
use std::str::FromStr;

use bevy::color::Color;
use bevy_ecs::resource::Resource;
use bevy_log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::ICEBERG_COUNT;
use crate::ocean::WaveParams;

/// Calm-sea wave parameters (sunny baseline).
pub const LOW_AMPLITUDE: f32 = 0.1;
pub const LOW_FREQUENCY: f32 = 0.25;
/// Rough-sea wave parameters (rain baseline, scaled further for storms).
pub const HIGH_AMPLITUDE: f32 = 0.4;
pub const HIGH_FREQUENCY: f32 = 0.4;

/// Ambient light color restored on every teardown.
pub const AMBIENT_BASELINE: Color = Color::srgb(0.251, 0.251, 0.251);
/// Ambient intensity factor restored on every teardown.
pub const AMBIENT_BASELINE_INTENSITY: f32 = 0.6;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum WeatherKind {
    #[default]
    Sunny,
    Rainy,
    Snowy,
    Stormy,
    Icy,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 5] = [
        WeatherKind::Sunny,
        WeatherKind::Rainy,
        WeatherKind::Snowy,
        WeatherKind::Stormy,
        WeatherKind::Icy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Sunny => "Sunny",
            WeatherKind::Rainy => "Rainy",
            WeatherKind::Snowy => "Snowy",
            WeatherKind::Stormy => "Stormy",
            WeatherKind::Icy => "Icy",
        }
    }

    pub fn profile(&self) -> WeatherProfile {
        match self {
            WeatherKind::Sunny => WeatherProfile {
                fallback_sky: Color::srgb_u8(0x87, 0xCE, 0xEB),
                water: WaterSettings {
                    amplitude: LOW_AMPLITUDE,
                    frequency: LOW_FREQUENCY,
                    speed: 1.0,
                    deep_color: Color::srgb_u8(0x00, 0x33, 0x66),
                    shallow_color: Color::srgb_u8(0x00, 0x55, 0x99),
                    opacity: 0.9,
                },
                fog: None,
                sun_intensity: 0.7,
                ambient_color: AMBIENT_BASELINE,
                ambient_intensity: 0.6,
                particles: None,
                ship_tint: None,
                iceberg_count: 0,
            },
            WeatherKind::Rainy => WeatherProfile {
                fallback_sky: Color::srgb_u8(0x44, 0x55, 0x66),
                water: WaterSettings {
                    amplitude: HIGH_AMPLITUDE,
                    frequency: HIGH_FREQUENCY,
                    speed: 1.0,
                    deep_color: Color::srgb_u8(0x22, 0x33, 0x44),
                    shallow_color: Color::srgb_u8(0x33, 0x44, 0x55),
                    opacity: 0.7,
                },
                fog: Some(FogProfile {
                    color: Color::srgb_u8(0x66, 0x77, 0x88),
                    near: 10.0,
                    far: 40.0,
                }),
                sun_intensity: 0.3,
                ambient_color: AMBIENT_BASELINE,
                ambient_intensity: 0.4,
                particles: Some(ParticleSystemKind::Rain),
                ship_tint: None,
                iceberg_count: 0,
            },
            WeatherKind::Snowy => WeatherProfile {
                fallback_sky: Color::srgb_u8(0xCC, 0xDD, 0xEE),
                water: WaterSettings {
                    amplitude: LOW_AMPLITUDE * 0.7,
                    frequency: LOW_FREQUENCY * 1.2,
                    speed: 1.0,
                    deep_color: Color::srgb_u8(0x33, 0x66, 0x77),
                    shallow_color: Color::srgb_u8(0x77, 0xAA, 0xCC),
                    opacity: 0.95,
                },
                fog: Some(FogProfile {
                    color: Color::srgb_u8(0xAA, 0xAA, 0xAA),
                    near: 5.0,
                    far: 30.0,
                }),
                sun_intensity: 0.25,
                ambient_color: Color::srgb_u8(0x99, 0xAA, 0xBB),
                ambient_intensity: 0.5,
                particles: Some(ParticleSystemKind::Snow),
                ship_tint: Some(Color::srgb_u8(0xE0, 0xE0, 0xE0)),
                iceberg_count: 0,
            },
            WeatherKind::Stormy => WeatherProfile {
                fallback_sky: Color::srgb_u8(0x11, 0x11, 0x22),
                water: WaterSettings {
                    amplitude: HIGH_AMPLITUDE * 1.8,
                    frequency: HIGH_FREQUENCY * 0.8,
                    speed: 1.8,
                    deep_color: Color::srgb_u8(0x10, 0x20, 0x30),
                    shallow_color: Color::srgb_u8(0x22, 0x33, 0x44),
                    opacity: 0.6,
                },
                fog: Some(FogProfile {
                    color: Color::srgb_u8(0x22, 0x22, 0x33),
                    near: 5.0,
                    far: 25.0,
                }),
                sun_intensity: 0.15,
                ambient_color: Color::srgb_u8(0x55, 0x66, 0x77),
                ambient_intensity: 0.3,
                particles: Some(ParticleSystemKind::Spray),
                ship_tint: None,
                iceberg_count: 0,
            },
            WeatherKind::Icy => WeatherProfile {
                fallback_sky: Color::srgb_u8(0xE8, 0xF0, 0xF8),
                water: WaterSettings {
                    amplitude: LOW_AMPLITUDE * 0.1,
                    frequency: LOW_FREQUENCY * 0.5,
                    speed: 0.1,
                    deep_color: Color::srgb_u8(0xB0, 0xC0, 0xD0),
                    shallow_color: Color::srgb_u8(0xDD, 0xE8, 0xF0),
                    opacity: 0.98,
                },
                fog: Some(FogProfile {
                    color: Color::srgb_u8(0xD0, 0xD8, 0xE0),
                    near: 20.0,
                    far: 70.0,
                }),
                sun_intensity: 0.8,
                ambient_color: Color::srgb_u8(0xBA, 0xD4, 0xE8),
                ambient_intensity: 0.7,
                particles: None,
                ship_tint: Some(Color::srgb_u8(0xC0, 0xD0, 0xE0)),
                iceberg_count: ICEBERG_COUNT,
            },
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeatherKind {
    type Err = UnknownWeather;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunny" => Ok(WeatherKind::Sunny),
            "rainy" => Ok(WeatherKind::Rainy),
            "snowy" => Ok(WeatherKind::Snowy),
            "stormy" => Ok(WeatherKind::Stormy),
            "icy" => Ok(WeatherKind::Icy),
            _ => Err(UnknownWeather(s.to_string())),
        }
    }
}

/// A weather selector that matches no known kind. Callers recover by
/// falling back to [`WeatherKind::Sunny`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeather(pub String);

impl fmt::Display for UnknownWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weather kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownWeather {}

/// Which particle system a weather kind runs while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleSystemKind {
    Rain,
    Snow,
    Spray,
}

/// Linear fog settings for one weather kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogProfile {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

/// Water shader uniforms for one weather kind. Lives as a resource so the
/// client can sync the material from it every frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WaterSettings {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub deep_color: Color,
    pub shallow_color: Color,
    pub opacity: f32,
}

impl Default for WaterSettings {
    fn default() -> Self {
        WeatherKind::Sunny.profile().water
    }
}

impl WaterSettings {
    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            amplitude: self.amplitude,
            frequency: self.frequency,
            speed: self.speed,
        }
    }
}

/// Immutable visual parameter bundle for one weather kind.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherProfile {
    /// Flat background color used when the skybox texture is unavailable.
    pub fallback_sky: Color,
    pub water: WaterSettings,
    pub fog: Option<FogProfile>,
    /// Directional light intensity factor in [0, 1].
    pub sun_intensity: f32,
    pub ambient_color: Color,
    /// Ambient light intensity factor in [0, 1].
    pub ambient_intensity: f32,
    pub particles: Option<ParticleSystemKind>,
    /// Base color override applied to every ship submesh.
    pub ship_tint: Option<Color>,
    /// Static props spawned on apply (icebergs).
    pub iceberg_count: usize,
}

/// The weather switching state machine. `current` stays `None` until the
/// first application goes through (the skybox join point gates that).
#[derive(Resource, Debug, Default, Clone)]
pub struct WeatherState {
    current: Option<WeatherKind>,
}

impl WeatherState {
    pub fn current(&self) -> Option<WeatherKind> {
        self.current
    }

    /// Decide whether `target` must be applied. Returns the profile to
    /// apply, or `None` for an idempotent repeat. Icy is deliberately
    /// re-appliable: selecting it again tears down and re-rolls the
    /// iceberg field.
    pub fn request(&mut self, target: WeatherKind) -> Option<WeatherProfile> {
        if self.current == Some(target) && target != WeatherKind::Icy {
            debug!("weather already {target}, ignoring repeat request");
            return None;
        }
        self.current = Some(target);
        Some(target.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_always_applies() {
        for kind in WeatherKind::ALL {
            let mut state = WeatherState::default();
            assert!(state.request(kind).is_some());
            assert_eq!(state.current(), Some(kind));
        }
    }

    #[test]
    fn repeat_requests_are_idempotent_except_icy() {
        for kind in WeatherKind::ALL {
            let mut state = WeatherState::default();
            state.request(kind);
            let second = state.request(kind);
            if kind == WeatherKind::Icy {
                assert!(second.is_some(), "repeat Icy must re-apply");
            } else {
                assert!(second.is_none(), "repeat {kind} must be a no-op");
            }
            assert_eq!(state.current(), Some(kind));
        }
    }

    #[test]
    fn switching_kinds_always_applies() {
        let mut state = WeatherState::default();
        state.request(WeatherKind::Snowy);
        assert!(state.request(WeatherKind::Sunny).is_some());
        assert_eq!(state.current(), Some(WeatherKind::Sunny));
    }

    #[test]
    fn selector_parsing_is_case_insensitive() {
        assert_eq!("Stormy".parse::<WeatherKind>(), Ok(WeatherKind::Stormy));
        assert_eq!("snowy".parse::<WeatherKind>(), Ok(WeatherKind::Snowy));
        assert!("drizzle".parse::<WeatherKind>().is_err());
    }

    #[test]
    fn profile_table_is_consistent() {
        for kind in WeatherKind::ALL {
            let profile = kind.profile();
            assert!(profile.water.opacity > 0.0 && profile.water.opacity <= 1.0);
            assert!(profile.water.amplitude > 0.0);
            assert!(profile.water.frequency > 0.0);
            if let Some(fog) = profile.fog {
                assert!(fog.near < fog.far, "{kind}: fog near must precede far");
            }
            let expected_icebergs = kind == WeatherKind::Icy;
            assert_eq!(profile.iceberg_count > 0, expected_icebergs);
        }
        assert_eq!(
            WeatherKind::Rainy.profile().particles,
            Some(ParticleSystemKind::Rain)
        );
        assert_eq!(
            WeatherKind::Snowy.profile().particles,
            Some(ParticleSystemKind::Snow)
        );
        assert_eq!(
            WeatherKind::Stormy.profile().particles,
            Some(ParticleSystemKind::Spray)
        );
        assert!(WeatherKind::Sunny.profile().particles.is_none());
        assert!(WeatherKind::Icy.profile().particles.is_none());
        assert!(WeatherKind::Snowy.profile().ship_tint.is_some());
        assert!(WeatherKind::Icy.profile().ship_tint.is_some());
        assert!(WeatherKind::Sunny.profile().fog.is_none());
    }
}
