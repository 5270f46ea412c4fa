pub use cruise::CruiseControl;
pub use dashboard::Dashboard;
pub use diagnostics::Diagnostics;
pub use sim_sensor::SensorSimulator;

pub mod cruise;
pub mod dashboard;
pub mod diagnostics;
mod sim_sensor;

use crate::{runtime::Pipeline, Config};

/// Construct the vehicle pipeline.
///
/// Per tick the sensors are updated first, then the cruise control acts on the
/// new radar reading, then the dashboard and diagnostics report the result.
pub fn vehicle_pipeline(config: Config) -> Pipeline<Config> {
    let mut pipe = Pipeline::new(config);

    pipe.add_component_default::<SensorSimulator>();
    pipe.add_component_default::<CruiseControl>();
    pipe.add_component_default::<Dashboard>();
    pipe.add_component_default::<Diagnostics>();

    pipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        logger::{tests::SharedBuffer, TelemetryLog},
        runtime::ComponentContext,
    };

    #[test]
    fn test_vehicle_pipeline_tick() {
        let mut config = Config::default();
        config.simulation.seed = Some(2024);

        let buffer = SharedBuffer::default();
        let mut ctx = ComponentContext::new(TelemetryLog::from_writer(buffer.clone()));
        let mut pipe = vehicle_pipeline(config);

        assert_eq!(pipe.len(), 4);

        for _ in 0..5 {
            pipe.tick(&mut ctx);

            let expected = cruise::decide(ctx.vehicle.radar.read());
            assert_eq!(ctx.vehicle.engine.throttle_position(), expected.throttle);
            assert_eq!(ctx.vehicle.brake.brake_pressure(), expected.brake);
        }

        assert_eq!(ctx.iteration(), 5);

        let messages = buffer.messages();
        let sections: Vec<&str> = messages
            .iter()
            .map(|message| message.as_str())
            .filter(|message| {
                [
                    "Updating sensors.",
                    "Running adaptive cruise control.",
                    "Displaying vehicle dashboard.",
                    "Running diagnostics.",
                ]
                .contains(message)
            })
            .collect();

        assert_eq!(sections.len(), 20);
        assert_eq!(
            &sections[..4],
            &[
                "Updating sensors.",
                "Running adaptive cruise control.",
                "Displaying vehicle dashboard.",
                "Running diagnostics.",
            ]
        );
    }
}
