//! Custom ocean shader material.
//!
//! The ocean is a StandardMaterial extension whose vertex stage displaces
//! the plane with the same two-sinusoid formula as
//! `shared::ocean::wave_height`, and whose fragment stage mixes the deep and
//! shallow water colors by wave height. Keeping the formula identical on
//! both sides is what lets the ship float on the surface it is drawn over.

use bevy::{
    asset::embedded_asset,
    pbr::{ExtendedMaterial, MaterialExtension, MaterialExtensionKey, MaterialExtensionPipeline},
    prelude::*,
    render::render_resource::{
        AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType,
        SpecializedMeshPipelineError,
    },
};

use shared::weather::WaterSettings;

/// Plugin that registers the ocean material and its embedded shader.
pub struct OceanShaderPlugin;

impl Plugin for OceanShaderPlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "ocean.wgsl");
        app.add_plugins(MaterialPlugin::<StandardOceanMaterial>::default());
    }
}

/// Complete ocean material type.
pub type StandardOceanMaterial = ExtendedMaterial<StandardMaterial, OceanMaterialExtension>;

/// Uniform data for the ocean shader, written once per frame from the
/// active [`WaterSettings`] and the simulation clock.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct OceanUniform {
    pub deep_color: Vec4,
    pub shallow_color: Vec4,
    pub time: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub wave_speed: f32,
    pub opacity: f32,
}

impl Default for OceanUniform {
    fn default() -> Self {
        Self::from_settings(&WaterSettings::default(), 0.0)
    }
}

impl OceanUniform {
    pub fn from_settings(settings: &WaterSettings, time: f32) -> Self {
        Self {
            deep_color: Vec4::from_array(LinearRgba::from(settings.deep_color).to_f32_array()),
            shallow_color: Vec4::from_array(
                LinearRgba::from(settings.shallow_color).to_f32_array(),
            ),
            time,
            wave_amplitude: settings.amplitude,
            wave_frequency: settings.frequency,
            wave_speed: settings.speed,
            opacity: settings.opacity,
        }
    }
}

/// Material extension carrying the wave uniforms.
#[derive(Asset, AsBindGroup, TypePath, Debug, Clone, Default)]
pub struct OceanMaterialExtension {
    #[uniform(100)]
    pub uniform: OceanUniform,
}

impl MaterialExtension for OceanMaterialExtension {
    fn vertex_shader() -> ShaderRef {
        "embedded://client/shaders/ocean.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "embedded://client/shaders/ocean.wgsl".into()
    }

    fn specialize(
        _pipeline: &MaterialExtensionPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &bevy::render::mesh::MeshVertexBufferLayoutRef,
        _key: MaterialExtensionKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Enable alpha blending for water transparency
        if let Some(fragment) = &mut descriptor.fragment {
            if let Some(Some(target_state)) = fragment.targets.first_mut() {
                target_state.blend =
                    Some(bevy::render::render_resource::BlendState::ALPHA_BLENDING);
            }
        }
        Ok(())
    }
}

/// Creates the ocean material with the given initial settings.
pub fn create_ocean_material(settings: &WaterSettings) -> StandardOceanMaterial {
    ExtendedMaterial {
        base: StandardMaterial {
            base_color: Color::srgba(0.2, 0.5, 0.8, settings.opacity),
            alpha_mode: AlphaMode::Blend,
            // Render both sides for underwater visibility
            cull_mode: None,
            double_sided: true,
            ..default()
        },
        extension: OceanMaterialExtension {
            uniform: OceanUniform::from_settings(settings, 0.0),
        },
    }
}
