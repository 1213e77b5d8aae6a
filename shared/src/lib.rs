pub mod clock;
pub mod constants;
pub mod ocean;
pub mod particles;
pub mod sets;
pub mod ship;
pub mod weather;

pub use constants::*;
