pub mod ocean;
pub mod ship;

use bevy::prelude::*;
use shared::sets::SimulationSet;
use shared::weather::{AMBIENT_BASELINE, AMBIENT_BASELINE_INTENSITY};

/// Full-strength illuminance of the directional light; weather profiles
/// scale it by their sun intensity factor.
pub const SUN_FULL_ILLUMINANCE: f32 = 10_000.0;
/// Full-strength brightness of the ambient light, scaled the same way.
pub const AMBIENT_FULL_BRIGHTNESS: f32 = 500.0;

/// Spawns the static scene: lights, the ship and the ocean plane.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_lights, ship::setup_ship, ocean::setup_ocean),
        )
        .add_systems(
            Update,
            (
                ship::navigate_ship.in_set(SimulationSet::Navigation),
                ocean::sync_ocean_uniforms.in_set(SimulationSet::Navigation),
            ),
        );
    }
}

fn setup_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: AMBIENT_BASELINE,
        brightness: AMBIENT_BASELINE_INTENSITY * AMBIENT_FULL_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 0.5 * SUN_FULL_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
