//! Weather switching.
//!
//! [`apply_pending_weather`] is the whole state machine side effect: when a
//! request is pending and the skyboxes have resolved, it runs the
//! transition rule from `shared::weather`, then performs a full teardown
//! followed by the target profile's application inside a single system run.
//! A frame therefore never renders a half-switched weather.

pub mod icebergs;
pub mod skybox;

use bevy::{
    core_pipeline::Skybox, pbr::DistanceFog, platform::collections::HashMap, prelude::*,
};
use rand::thread_rng;
use shared::sets::SimulationSet;
use shared::weather::tint::TintLedger;
use shared::weather::{
    WaterSettings, WeatherKind, WeatherProfile, WeatherState, AMBIENT_BASELINE,
    AMBIENT_BASELINE_INTENSITY,
};

use crate::effects::WeatherEffects;
use crate::world::ship::ShipSubmesh;
use crate::world::{AMBIENT_FULL_BRIGHTNESS, SUN_FULL_ILLUMINANCE};
use crate::InitialWeather;
use skybox::SkyboxLibrary;

/// Request a weather switch. Sent by the UI buttons and the hotkeys.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetWeather(pub WeatherKind);

/// Everything the active weather owns: the state machine, the pending
/// request, the transient iceberg props and the pre-tint material snapshot
/// per ship submesh.
#[derive(Resource, Default)]
pub struct WeatherSession {
    pub state: WeatherState,
    pub pending: Option<WeatherKind>,
    icebergs: Vec<Entity>,
    tint_snapshots: TintLedger<Handle<StandardMaterial>>,
}

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SetWeather>()
            .init_resource::<WeatherSession>()
            .init_resource::<WeatherEffects>()
            .init_resource::<SkyboxLibrary>()
            .add_systems(Startup, (skybox::load_skyboxes, queue_initial_weather))
            .add_systems(
                Update,
                (
                    skybox::poll_skyboxes,
                    queue_weather_requests,
                    apply_pending_weather,
                )
                    .chain()
                    .in_set(SimulationSet::Weather),
            );
    }
}

fn queue_initial_weather(initial: Res<InitialWeather>, mut session: ResMut<WeatherSession>) {
    session.pending = Some(initial.0);
}

fn queue_weather_requests(
    mut requests: EventReader<SetWeather>,
    mut session: ResMut<WeatherSession>,
) {
    if let Some(SetWeather(kind)) = requests.read().last() {
        session.pending = Some(*kind);
    }
}

/// Applies the pending weather request, if any. Held back (not dropped)
/// until all five skybox loads have resolved.
#[allow(clippy::too_many_arguments)]
fn apply_pending_weather(
    mut commands: Commands,
    mut session: ResMut<WeatherSession>,
    mut effects: ResMut<WeatherEffects>,
    skyboxes: Res<SkyboxLibrary>,
    mut water: ResMut<WaterSettings>,
    mut ambient: ResMut<AmbientLight>,
    mut sun: Query<&mut DirectionalLight>,
    mut cameras: Query<(Entity, &mut Camera), With<Camera3d>>,
    submeshes: Query<(Entity, &MeshMaterial3d<StandardMaterial>), With<ShipSubmesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if session.pending.is_none() || !skyboxes.all_resolved() {
        return;
    }
    let Some(target) = session.pending.take() else {
        return;
    };
    let Some(profile) = session.state.request(target) else {
        return;
    };
    info!("Setting weather to: {target}");

    // Teardown: no visual side effect of the previous weather survives.
    for entity in session.icebergs.drain(..) {
        commands.entity(entity).despawn();
    }
    let restored = session.tint_snapshots.restore();
    for (entity, original) in &restored {
        commands.entity(*entity).insert(MeshMaterial3d(original.clone()));
    }
    for (camera_entity, _) in &mut cameras {
        commands
            .entity(camera_entity)
            .remove::<DistanceFog>()
            .remove::<Skybox>();
    }
    *ambient = AmbientLight {
        color: AMBIENT_BASELINE,
        brightness: AMBIENT_BASELINE_INTENSITY * AMBIENT_FULL_BRIGHTNESS,
        ..default()
    };
    water.speed = 1.0;

    // Apply the target profile.
    apply_profile(
        &profile,
        target,
        &restored,
        &mut commands,
        &mut session,
        &mut effects,
        &skyboxes,
        &mut water,
        &mut ambient,
        &mut sun,
        &mut cameras,
        &submeshes,
        &mut materials,
        &mut meshes,
    );
}

#[allow(clippy::too_many_arguments)]
fn apply_profile(
    profile: &WeatherProfile,
    target: WeatherKind,
    restored: &HashMap<Entity, Handle<StandardMaterial>>,
    commands: &mut Commands,
    session: &mut WeatherSession,
    effects: &mut WeatherEffects,
    skyboxes: &SkyboxLibrary,
    water: &mut WaterSettings,
    ambient: &mut AmbientLight,
    sun: &mut Query<&mut DirectionalLight>,
    cameras: &mut Query<(Entity, &mut Camera), With<Camera3d>>,
    submeshes: &Query<(Entity, &MeshMaterial3d<StandardMaterial>), With<ShipSubmesh>>,
    materials: &mut Assets<StandardMaterial>,
    meshes: &mut Assets<Mesh>,
) {
    for (camera_entity, mut camera) in cameras.iter_mut() {
        match skyboxes.cubemap(target) {
            Some(cubemap) => {
                commands.entity(camera_entity).insert(Skybox {
                    image: cubemap.clone(),
                    brightness: 1000.0,
                    rotation: Quat::IDENTITY,
                });
            }
            None => {
                camera.clear_color = ClearColorConfig::Custom(profile.fallback_sky);
            }
        }
        if let Some(fog) = profile.fog {
            commands.entity(camera_entity).insert(DistanceFog {
                color: fog.color,
                falloff: bevy::pbr::FogFalloff::Linear {
                    start: fog.near,
                    end: fog.far,
                },
                ..default()
            });
        }
    }

    *water = profile.water.clone();

    for mut light in sun.iter_mut() {
        light.illuminance = profile.sun_intensity * SUN_FULL_ILLUMINANCE;
    }
    *ambient = AmbientLight {
        color: profile.ambient_color,
        brightness: profile.ambient_intensity * AMBIENT_FULL_BRIGHTNESS,
        ..default()
    };

    // The pools persist across switches; membership is decided by the
    // current weather, so lazily creating one here is enough.
    if let Some(kind) = profile.particles {
        effects.ensure_pool(kind, &mut thread_rng());
    }

    if profile.iceberg_count > 0 {
        session.icebergs = icebergs::spawn_icebergs(
            commands,
            meshes,
            materials,
            profile.iceberg_count,
            &mut thread_rng(),
        );
    }

    if let Some(tint) = profile.ship_tint {
        for (entity, current) in submeshes.iter() {
            // The restore above has not been flushed yet; the ledger prefers
            // the handle it put back over what the query still sees.
            let original = session
                .tint_snapshots
                .snapshot(entity, current.0.clone(), restored);

            let mut tinted = materials.get(&original).cloned().unwrap_or_default();
            tinted.base_color = tint;
            commands
                .entity(entity)
                .insert(MeshMaterial3d(materials.add(tinted)));
        }
    }
}

/// Convenience used by the effect systems to gate on the active weather.
pub fn is_current(session: &WeatherSession, kind: WeatherKind) -> bool {
    session.state.current() == Some(kind)
}
