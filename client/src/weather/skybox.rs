//! Skybox cubemap loading.
//!
//! One stacked-face cubemap image per weather kind, loaded fire-and-forget
//! at startup. Each slot resolves to Ready (the image is reinterpreted as a
//! cube array) or Fallback (the load failed and that weather keeps a flat
//! background color forever; failures are logged, never retried and never
//! fatal). The first weather application waits until every slot resolved,
//! so a switch never observes a half-loaded sky.

use bevy::{
    asset::LoadState,
    platform::collections::HashMap,
    prelude::*,
    render::render_resource::{TextureViewDescriptor, TextureViewDimension},
};
use shared::weather::WeatherKind;

#[derive(Debug, Clone)]
pub enum SkySlot {
    Loading(Handle<Image>),
    Ready(Handle<Image>),
    Fallback,
}

/// Load status of the five weather skyboxes.
#[derive(Resource, Debug, Default)]
pub struct SkyboxLibrary {
    slots: HashMap<WeatherKind, SkySlot>,
}

impl SkyboxLibrary {
    /// The cubemap for a weather kind, or `None` when it fell back.
    pub fn cubemap(&self, kind: WeatherKind) -> Option<&Handle<Image>> {
        match self.slots.get(&kind) {
            Some(SkySlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// True once every slot is Ready or Fallback. Gates the first weather
    /// application.
    pub fn all_resolved(&self) -> bool {
        self.slots.len() == WeatherKind::ALL.len()
            && self
                .slots
                .values()
                .all(|slot| !matches!(slot, SkySlot::Loading(_)))
    }
}

pub fn load_skyboxes(asset_server: Res<AssetServer>, mut library: ResMut<SkyboxLibrary>) {
    for kind in WeatherKind::ALL {
        let path = format!("textures/skybox/{}.png", kind.label().to_lowercase());
        let handle = asset_server.load(path);
        library.slots.insert(kind, SkySlot::Loading(handle));
    }
}

/// Polls the pending loads and finalizes each as Ready or Fallback.
pub fn poll_skyboxes(
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut library: ResMut<SkyboxLibrary>,
) {
    for (kind, slot) in library.slots.iter_mut() {
        let SkySlot::Loading(pending) = slot else {
            continue;
        };
        let handle = pending.clone();
        match asset_server.load_state(handle.id()) {
            LoadState::Loaded => {
                let Some(image) = images.get_mut(handle.id()) else {
                    continue;
                };
                // The asset is a vertical strip of six faces; reinterpret it
                // as a cube array so it can back a Skybox component.
                if image.texture_descriptor.array_layer_count() == 1 {
                    image.reinterpret_stacked_2d_as_array(image.height() / image.width());
                    image.texture_view_descriptor = Some(TextureViewDescriptor {
                        dimension: Some(TextureViewDimension::Cube),
                        ..default()
                    });
                }
                info!("{kind} skybox loaded");
                *slot = SkySlot::Ready(handle);
            }
            LoadState::Failed(err) => {
                warn!("{kind} skybox failed to load ({err}); using flat sky color");
                *slot = SkySlot::Fallback;
            }
            _ => {}
        }
    }
}
