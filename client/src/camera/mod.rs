//! Follow camera.
//!
//! The window plugin owns projection/resize handling; this module only
//! keeps the camera trained on the ship, easing the look target toward it
//! so wave motion does not jitter the view.

use bevy::prelude::*;
use shared::sets::SimulationSet;

use crate::world::ship::Ship;

/// Eased look target; lerps toward the ship each frame.
#[derive(Resource, Debug, Default)]
pub struct CameraTarget(pub Vec3);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTarget>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_ship.in_set(SimulationSet::Camera));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn follow_ship(
    mut target: ResMut<CameraTarget>,
    ships: Query<&Transform, With<Ship>>,
    mut cameras: Query<&mut Transform, (With<Camera3d>, Without<Ship>)>,
    mut missed_ship: Local<bool>,
) {
    let Ok(ship) = ships.single() else {
        if !*missed_ship {
            debug!("no ship to follow, skipping camera update");
            *missed_ship = true;
        }
        return;
    };
    target.0 = target.0.lerp(ship.translation, 0.1);
    for mut camera in cameras.iter_mut() {
        camera.look_at(target.0, Vec3::Y);
    }
}
