use bevy_ecs::resource::Resource;

/// Global simulation time, advanced exactly once per frame before any other
/// update. Everything time-dependent (shader `u_time`, wave sampling for the
/// ship, snow flutter) reads this instead of querying the engine clock so a
/// frame never observes two different times.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimulationClock {
    pub elapsed: f32,
}

impl SimulationClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut clock = SimulationClock::default();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!((clock.elapsed - 0.032).abs() < 1e-6);
    }
}
