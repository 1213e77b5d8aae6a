mod camera;
mod effects;
mod input;
mod shaders;
mod ui;
mod weather;
mod world;

use bevy::{prelude::*, window::PresentMode};
use clap::Parser;
use shared::{
    clock::SimulationClock, sets::SimulationSet, ship::ShipNavigator, weather::WaterSettings,
    weather::WeatherKind,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Weather applied once the skyboxes have resolved
    #[arg(long, help = "Initial weather: sunny, rainy, snowy, stormy or icy")]
    weather: Option<String>,
}

/// Weather kind requested on the command line (or the Sunny default).
#[derive(Resource, Debug, Clone, Copy)]
pub struct InitialWeather(pub WeatherKind);

fn main() {
    let args = Args::parse();

    // Logging starts with the App, so selector errors go to stderr here.
    let initial = match args.weather {
        Some(name) => name.parse::<WeatherKind>().unwrap_or_else(|err| {
            eprintln!("{err}; falling back to Sunny");
            WeatherKind::Sunny
        }),
        None => WeatherKind::Sunny,
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Brigantine".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    app.insert_resource(InitialWeather(initial))
        .init_resource::<SimulationClock>()
        .init_resource::<WaterSettings>()
        .init_resource::<ShipNavigator>()
        // The fixed frame order: clock advance, pending weather switch, ship
        // navigation, wake/precipitation updates, camera follow.
        .configure_sets(
            Update,
            (
                SimulationSet::Clock,
                SimulationSet::Weather,
                SimulationSet::Navigation,
                SimulationSet::Effects,
                SimulationSet::Camera,
            )
                .chain(),
        )
        .add_systems(Update, advance_clock.in_set(SimulationSet::Clock))
        .add_systems(Update, input::keyboard::weather_hotkeys)
        .add_plugins((
            shaders::water::OceanShaderPlugin,
            world::ScenePlugin,
            weather::WeatherPlugin,
            effects::EffectsPlugin,
            camera::CameraPlugin,
            ui::WeatherUiPlugin,
        ))
        .run();
}

fn advance_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.advance(time.delta_secs());
}
