pub mod waves;

pub use waves::{wave_height, wave_normal, WaveParams};
