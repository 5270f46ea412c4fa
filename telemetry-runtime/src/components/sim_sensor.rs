use rand::{rngs::StdRng, SeedableRng};

use crate::{
    runtime::{Component, ComponentContext},
    Config,
};

/// Sensor simulator.
///
/// Draws new readings for every sensor on each tick. With a configured seed the
/// sequence of readings is reproducible.
pub struct SensorSimulator {
    rng: StdRng,
}

impl SensorSimulator {
    /// Construct a simulator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Component<Config> for SensorSimulator {
    fn new(config: Config) -> Self
    where
        Self: Sized,
    {
        match config.simulation.seed {
            Some(seed) => {
                log::debug!("Sensor simulator seeded with {}", seed);
                Self::with_seed(seed)
            }
            None => Self {
                rng: StdRng::from_entropy(),
            },
        }
    }

    fn tick(&mut self, ctx: &mut ComponentContext) {
        ctx.vehicle.update_sensors(&mut self.rng, &mut ctx.log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::TelemetryLog;

    #[test]
    fn test_seeded_simulation() {
        let mut config = Config::default();
        config.simulation.seed = Some(1234);

        let mut sim_a = SensorSimulator::new(config.clone());
        let mut sim_b = SensorSimulator::new(config);

        let mut ctx_a = ComponentContext::new(TelemetryLog::disabled());
        let mut ctx_b = ComponentContext::new(TelemetryLog::disabled());

        for _ in 0..10 {
            sim_a.tick(&mut ctx_a);
            sim_b.tick(&mut ctx_b);
        }

        assert_eq!(ctx_a.vehicle, ctx_b.vehicle);
        assert!(ctx_a.vehicle.fuel.read() < 50.0);
    }
}
