use bevy_ecs::schedule::SystemSet;

/// Per-frame update order. The sets are chained in the client so each frame
/// runs clock advance, weather application, ship navigation, particle
/// effects and camera follow strictly in sequence.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Clock,
    Weather,
    Navigation,
    Effects,
    Camera,
}
