//! Ship spawn and per-frame navigation.

use bevy::prelude::*;
use shared::clock::SimulationClock;
use shared::ship::ShipNavigator;
use shared::weather::WaterSettings;
use shared::SHIP_PATH_START;

/// Marker for the ship root entity (the one the navigator moves).
#[derive(Component)]
pub struct Ship;

/// Marker for the tintable ship submeshes (hull and cabin).
#[derive(Component)]
pub struct ShipSubmesh;

pub fn setup_ship(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hull_mesh = meshes.add(Cuboid::new(2.0, 0.5, 1.0));
    let hull_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x80, 0x80, 0x80),
        ..default()
    });
    let cabin_mesh = meshes.add(Cuboid::new(0.8, 0.4, 0.6));
    let cabin_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xA0, 0xA0, 0xA0),
        ..default()
    });

    commands
        .spawn((
            Ship,
            Name::new("ship"),
            Transform::from_translation(SHIP_PATH_START),
            Visibility::default(),
        ))
        .with_children(|ship| {
            ship.spawn((
                ShipSubmesh,
                Name::new("hull"),
                Mesh3d(hull_mesh),
                MeshMaterial3d(hull_material),
            ))
            .with_children(|hull| {
                hull.spawn((
                    ShipSubmesh,
                    Name::new("cabin"),
                    Mesh3d(cabin_mesh),
                    MeshMaterial3d(cabin_material),
                    Transform::from_xyz(0.0, 0.45, 0.0),
                ));
            });
        });
}

/// Advances the ship along its route and orients it on the wave surface.
pub fn navigate_ship(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    water: Res<WaterSettings>,
    mut navigator: ResMut<ShipNavigator>,
    mut ships: Query<&mut Transform, With<Ship>>,
    mut missed_ship: Local<bool>,
) {
    let Ok(mut transform) = ships.single_mut() else {
        if !*missed_ship {
            debug!("no ship to navigate, skipping update");
            *missed_ship = true;
        }
        return;
    };
    let pose = navigator.advance(time.delta_secs(), clock.elapsed, &water.wave_params());
    transform.translation = pose.position;
    transform.look_at(pose.look_target, pose.up);
}
