use bevy::math::Vec3;

/// Y coordinate of the resting ocean surface.
pub const OCEAN_LEVEL: f32 = -0.5;
/// Side length of the ocean plane in world units.
pub const OCEAN_SIZE: f32 = 100.0;
/// Subdivisions per side of the ocean plane mesh.
pub const OCEAN_SUBDIVISIONS: u32 = 50;

/// Endpoints of the fixed ship route.
pub const SHIP_PATH_START: Vec3 = Vec3::new(-10.0, 0.1, 0.0);
pub const SHIP_PATH_END: Vec3 = Vec3::new(10.0, 0.1, 0.0);
/// Path progress per second (full crossing takes 50 s).
pub const SHIP_SPEED: f32 = 0.02;
/// How far above the sampled wave surface the hull sits.
pub const SHIP_BUOYANCY_OFFSET: f32 = 0.2;

pub const MAX_RAIN_PARTICLES: usize = 1500;
pub const MAX_SNOW_PARTICLES: usize = 1000;
pub const MAX_SPRAY_PARTICLES: usize = 500;
pub const MAX_WAKE_PARTICLES: usize = 300;

/// Parked position for inactive particle slots, far below anything rendered.
pub const OFFSCREEN_Y: f32 = -1000.0;
/// Precipitation below this height respawns above the ship.
pub const PRECIPITATION_FLOOR: f32 = -5.0;

pub const ICEBERG_COUNT: usize = 15;
