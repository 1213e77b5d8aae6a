//! Iceberg props for icy weather.
//!
//! Icebergs are the one transient prop: they are despawned on every weather
//! switch and re-rolled on every Icy application, including a repeat Icy
//! selection.

use bevy::prelude::*;
use rand::Rng;
use shared::OCEAN_LEVEL;
use std::f32::consts::PI;

/// Half extent of the square drift field the icebergs scatter over.
const FIELD_EXTENT: f32 = 60.0;

#[derive(Component)]
pub struct Iceberg;

pub fn spawn_icebergs(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xE0, 0xE8, 0xFF),
        perceptual_roughness: 0.3,
        metallic: 0.1,
        ..default()
    });

    (0..count)
        .map(|_| {
            let size_x = rng.gen::<f32>() * 2.0 + 1.0;
            let size_y = rng.gen::<f32>() + 0.5;
            let size_z = rng.gen::<f32>() * 2.0 + 1.0;
            let mesh = meshes.add(Cuboid::new(size_x, size_y, size_z));
            commands
                .spawn((
                    Iceberg,
                    Mesh3d(mesh),
                    MeshMaterial3d(material.clone()),
                    Transform {
                        translation: Vec3::new(
                            (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                            OCEAN_LEVEL + size_y * 0.3 - 0.1,
                            (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                        ),
                        rotation: Quat::from_euler(
                            EulerRot::XYZ,
                            rng.gen::<f32>() * PI,
                            rng.gen::<f32>() * PI,
                            rng.gen::<f32>() * PI,
                        ),
                        ..default()
                    },
                ))
                .id()
        })
        .collect()
}
