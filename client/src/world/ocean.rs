//! Ocean plane spawn and per-frame shader uniform sync.

use bevy::prelude::*;
use shared::clock::SimulationClock;
use shared::weather::WaterSettings;
use shared::{OCEAN_LEVEL, OCEAN_SIZE, OCEAN_SUBDIVISIONS};

use crate::shaders::water::{create_ocean_material, OceanUniform, StandardOceanMaterial};

/// Handle to the single shared ocean material.
#[derive(Resource)]
pub struct OceanMaterialHandle(pub Handle<StandardOceanMaterial>);

pub fn setup_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardOceanMaterial>>,
    water: Res<WaterSettings>,
) {
    let mesh = meshes.add(
        Plane3d::default()
            .mesh()
            .size(OCEAN_SIZE, OCEAN_SIZE)
            .subdivisions(OCEAN_SUBDIVISIONS),
    );
    let handle = materials.add(create_ocean_material(&water));

    commands.spawn((
        Name::new("ocean"),
        Mesh3d(mesh),
        MeshMaterial3d(handle.clone()),
        Transform::from_xyz(0.0, OCEAN_LEVEL, 0.0),
    ));
    commands.insert_resource(OceanMaterialHandle(handle));

    info!("Ocean initialized with two-sinusoid wave shader");
}

/// Writes the active water settings and simulation time into the shader
/// uniform every frame, so a weather switch reaches the GPU on the next
/// rendered frame.
pub fn sync_ocean_uniforms(
    clock: Res<SimulationClock>,
    water: Res<WaterSettings>,
    handle: Res<OceanMaterialHandle>,
    mut materials: ResMut<Assets<StandardOceanMaterial>>,
) {
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };
    material.extension.uniform = OceanUniform::from_settings(&water, clock.elapsed);
}
