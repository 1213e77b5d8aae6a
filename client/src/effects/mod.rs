//! Per-frame particle effect updates and rendering.
//!
//! The pools live in plain resources and are drawn with gizmos, the same
//! way the debug fluid particles are rendered: rain as short streaks, snow
//! and spray as small spheres, the wake as fading foam points. Each
//! precipitation system only runs while its weather is current; the wake
//! runs always. Pool storage persists across weather switches.

use bevy::prelude::*;
use rand::thread_rng;
use shared::clock::SimulationClock;
use shared::particles::{RainCurtain, SeaSpray, ShipWake, SnowDrift};
use shared::sets::SimulationSet;
use shared::weather::{ParticleSystemKind, WeatherKind};
use shared::OCEAN_LEVEL;

use crate::weather::{is_current, WeatherSession};
use crate::world::ship::Ship;

/// Lazily created particle pools, one per precipitation kind. Creation
/// happens on the first weather application that needs a pool; afterwards
/// the pool is reused forever.
#[derive(Resource, Default)]
pub struct WeatherEffects {
    rain: Option<RainCurtain>,
    snow: Option<SnowDrift>,
    spray: Option<SeaSpray>,
}

impl WeatherEffects {
    pub fn ensure_pool(&mut self, kind: ParticleSystemKind, rng: &mut impl rand::Rng) {
        match kind {
            ParticleSystemKind::Rain => {
                if self.rain.is_none() {
                    self.rain = Some(RainCurtain::new(rng));
                }
            }
            ParticleSystemKind::Snow => {
                if self.snow.is_none() {
                    self.snow = Some(SnowDrift::new(rng));
                }
            }
            ParticleSystemKind::Spray => {
                if self.spray.is_none() {
                    self.spray = Some(SeaSpray::new());
                }
            }
        }
    }
}

/// The wake pool; unlike precipitation it is active for the whole session.
#[derive(Resource, Default)]
pub struct WakeEffect(pub ShipWake);

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WakeEffect>().add_systems(
            Update,
            (update_wake, update_rain, update_snow, update_spray)
                .chain()
                .in_set(SimulationSet::Effects),
        );
    }
}

fn update_wake(
    time: Res<Time>,
    mut wake: ResMut<WakeEffect>,
    ships: Query<&Transform, With<Ship>>,
    mut gizmos: Gizmos,
    mut missed_ship: Local<bool>,
) {
    let Ok(ship) = ships.single() else {
        if !*missed_ship {
            debug!("no ship to trail, skipping wake update");
            *missed_ship = true;
        }
        return;
    };
    wake.0.update(
        time.delta_secs(),
        ship.translation,
        ship.rotation,
        &mut thread_rng(),
    );
    for particle in wake.0.particles().iter().filter(|p| p.alpha > 0.0) {
        gizmos.sphere(
            particle.position,
            particle.size * 0.5,
            Color::srgba(1.0, 1.0, 1.0, particle.alpha),
        );
    }
}

fn update_rain(
    time: Res<Time>,
    session: Res<WeatherSession>,
    mut effects: ResMut<WeatherEffects>,
    ships: Query<&Transform, With<Ship>>,
    mut gizmos: Gizmos,
    mut missed_ship: Local<bool>,
) {
    if !is_current(&session, WeatherKind::Rainy) {
        return;
    }
    let Some(rain) = effects.rain.as_mut() else {
        return;
    };
    let Ok(ship) = ships.single() else {
        if !*missed_ship {
            debug!("no ship to center the rain on, skipping update");
            *missed_ship = true;
        }
        return;
    };
    rain.update(
        time.delta_secs(),
        ship.translation.xz(),
        &mut thread_rng(),
    );

    let color = Color::srgba(0.667, 0.667, 0.933, 0.6);
    for particle in rain.particles() {
        gizmos.line(
            particle.position,
            particle.position - Vec3::Y * 0.4,
            color,
        );
    }
}

fn update_snow(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    session: Res<WeatherSession>,
    mut effects: ResMut<WeatherEffects>,
    ships: Query<&Transform, With<Ship>>,
    mut gizmos: Gizmos,
    mut missed_ship: Local<bool>,
) {
    if !is_current(&session, WeatherKind::Snowy) {
        return;
    }
    let Some(snow) = effects.snow.as_mut() else {
        return;
    };
    let Ok(ship) = ships.single() else {
        if !*missed_ship {
            debug!("no ship to center the snow on, skipping update");
            *missed_ship = true;
        }
        return;
    };
    snow.update(
        time.delta_secs(),
        clock.elapsed,
        ship.translation.xz(),
        &mut thread_rng(),
    );

    let color = Color::srgba(1.0, 1.0, 1.0, 0.8);
    for particle in snow.particles() {
        gizmos.sphere(particle.position, particle.size * 0.5, color);
    }
}

fn update_spray(
    time: Res<Time>,
    session: Res<WeatherSession>,
    mut effects: ResMut<WeatherEffects>,
    ships: Query<&Transform, With<Ship>>,
    mut gizmos: Gizmos,
    mut missed_ship: Local<bool>,
) {
    if !is_current(&session, WeatherKind::Stormy) {
        return;
    }
    let Some(spray) = effects.spray.as_mut() else {
        return;
    };
    let Ok(ship) = ships.single() else {
        if !*missed_ship {
            debug!("no ship to spray around, skipping update");
            *missed_ship = true;
        }
        return;
    };
    spray.update(
        time.delta_secs(),
        ship.translation,
        OCEAN_LEVEL,
        &mut thread_rng(),
    );

    let color = Color::srgba(1.0, 1.0, 1.0, 0.7);
    for particle in spray.particles().iter().filter(|p| p.is_live()) {
        gizmos.sphere(particle.position, particle.size * 0.5, color);
    }
}
