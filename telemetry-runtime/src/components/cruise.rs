use crate::runtime::{Component, ComponentContext};

/// Below this distance the vehicle slows down, in meters.
pub const DISTANCE_SLOW_DOWN: f64 = 50.0;
/// From this distance on the vehicle speeds up, in meters.
pub const DISTANCE_SPEED_UP: f64 = 100.0;

/// Distance band selected by the adaptive cruise control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Vehicle ahead is close, release throttle and brake.
    SlowDown,
    /// Keep the current pace.
    Maintain,
    /// Road ahead is clear.
    SpeedUp,
}

impl Band {
    /// Select the band for the given distance to the vehicle ahead.
    ///
    /// The lower bound of each band is inclusive: exactly 50 meters maintains
    /// speed and exactly 100 meters speeds up.
    pub fn from_distance(distance: f64) -> Self {
        if distance < DISTANCE_SLOW_DOWN {
            Band::SlowDown
        } else if distance < DISTANCE_SPEED_UP {
            Band::Maintain
        } else {
            Band::SpeedUp
        }
    }

    /// Actuator setpoint for this band.
    pub fn setpoint(&self) -> Setpoint {
        match self {
            Band::SlowDown => Setpoint {
                throttle: 30.0,
                brake: 50.0,
            },
            Band::Maintain => Setpoint {
                throttle: 50.0,
                brake: 0.0,
            },
            Band::SpeedUp => Setpoint {
                throttle: 70.0,
                brake: 0.0,
            },
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Band::SlowDown => write!(f, "Distance < 50, slowing down."),
            Band::Maintain => write!(f, "Distance between 50 and 100, maintaining speed."),
            Band::SpeedUp => write!(f, "Distance > 100, speeding up."),
        }
    }
}

/// Throttle and brake setpoint, both in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Setpoint {
    pub throttle: f64,
    pub brake: f64,
}

/// Decide the actuator setpoint from the distance to the vehicle ahead.
#[inline]
pub fn decide(distance: f64) -> Setpoint {
    Band::from_distance(distance).setpoint()
}

/// Adaptive cruise control.
///
/// Reads the radar and writes both the throttle and the brake on every tick,
/// even if the setpoint did not change.
pub struct CruiseControl;

impl<Cnf: Clone> Component<Cnf> for CruiseControl {
    fn new(_config: Cnf) -> Self
    where
        Self: Sized,
    {
        Self
    }

    fn tick(&mut self, ctx: &mut ComponentContext) {
        ctx.log.append("Running adaptive cruise control.");

        let distance = ctx.vehicle.radar.read();
        ctx.log.append(format!("Radar detected distance: {:.2}", distance));

        let band = Band::from_distance(distance);
        ctx.log.append(band.to_string());

        let setpoint = band.setpoint();

        log::debug!(
            "Cruise control {:?}: throttle {}% brake {}%",
            band,
            setpoint.throttle,
            setpoint.brake
        );

        ctx.vehicle.engine.set_throttle_position(setpoint.throttle);
        ctx.vehicle.brake.set_brake_pressure(setpoint.brake);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{tests::SharedBuffer, TelemetryLog};

    const SLOW_DOWN: Setpoint = Setpoint {
        throttle: 30.0,
        brake: 50.0,
    };
    const MAINTAIN: Setpoint = Setpoint {
        throttle: 50.0,
        brake: 0.0,
    };
    const SPEED_UP: Setpoint = Setpoint {
        throttle: 70.0,
        brake: 0.0,
    };

    #[test]
    fn test_decide_bands() {
        for distance in [-10.0, 0.0, 10.0, 15.0, 40.0, 49.0, 49.999] {
            assert_eq!(decide(distance), SLOW_DOWN, "distance {}", distance);
        }
        for distance in [50.0, 50.001, 75.0, 99.0, 99.999] {
            assert_eq!(decide(distance), MAINTAIN, "distance {}", distance);
        }
        for distance in [100.0, 100.001, 150.0, 200.0, 1e6] {
            assert_eq!(decide(distance), SPEED_UP, "distance {}", distance);
        }
    }

    #[test]
    fn test_decide_boundaries() {
        assert_eq!(Band::from_distance(49.999_999), Band::SlowDown);
        assert_eq!(Band::from_distance(50.0), Band::Maintain);
        assert_eq!(Band::from_distance(99.999_999), Band::Maintain);
        assert_eq!(Band::from_distance(100.0), Band::SpeedUp);
    }

    #[test]
    fn test_cruise_control_tick() {
        let buffer = SharedBuffer::default();
        let mut ctx = ComponentContext::new(TelemetryLog::from_writer(buffer.clone()));
        let mut cruise = <CruiseControl as Component<()>>::new(());

        ctx.vehicle.radar.set_distance(40.0);
        Component::<()>::tick(&mut cruise, &mut ctx);

        assert_eq!(ctx.vehicle.engine.throttle_position(), 30.0);
        assert_eq!(ctx.vehicle.brake.brake_pressure(), 50.0);

        ctx.vehicle.radar.set_distance(120.0);
        Component::<()>::tick(&mut cruise, &mut ctx);

        assert_eq!(ctx.vehicle.engine.throttle_position(), 70.0);
        assert_eq!(ctx.vehicle.brake.brake_pressure(), 0.0);

        assert_eq!(
            buffer.messages(),
            vec![
                "Running adaptive cruise control.",
                "Radar detected distance: 40.00",
                "Distance < 50, slowing down.",
                "Running adaptive cruise control.",
                "Radar detected distance: 120.00",
                "Distance > 100, speeding up.",
            ]
        );
    }

    #[test]
    fn test_cruise_control_overwrites_actuators() {
        let mut ctx = ComponentContext::new(TelemetryLog::disabled());
        let mut cruise = <CruiseControl as Component<()>>::new(());

        ctx.vehicle.radar.set_distance(75.0);
        ctx.vehicle.engine.set_throttle_position(95.0);
        ctx.vehicle.brake.set_brake_pressure(80.0);

        Component::<()>::tick(&mut cruise, &mut ctx);

        assert_eq!(ctx.vehicle.engine.throttle_position(), 50.0);
        assert_eq!(ctx.vehicle.brake.brake_pressure(), 0.0);
    }
}
