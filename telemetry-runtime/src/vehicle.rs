use rand::Rng;

use crate::{
    core::{
        Battery, BrakeControlUnit, EngineControlUnit, FuelSensor, RadarSensor, SpeedSensor,
        TemperatureSensor, TransmissionControlUnit,
    },
    logger::TelemetryLog,
};

/// Vehicle state.
///
/// The vehicle owns every sensor and control unit for the lifetime of the
/// simulation. Components borrow it from the component context for the
/// duration of a single tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vehicle {
    /// Speed sensor.
    pub speed: SpeedSensor,
    /// Fuel level sensor.
    pub fuel: FuelSensor,
    /// Engine temperature sensor.
    pub temperature: TemperatureSensor,
    /// Traction battery.
    pub battery: Battery,
    /// Forward radar.
    pub radar: RadarSensor,
    /// Engine control unit.
    pub engine: EngineControlUnit,
    /// Brake control unit.
    pub brake: BrakeControlUnit,
    /// Transmission control unit.
    pub transmission: TransmissionControlUnit,
}

impl Vehicle {
    /// Update all sensors for one tick.
    ///
    /// The temperature sensor is fed the speed drawn in this same tick.
    pub fn update_sensors<R: Rng + ?Sized>(&mut self, rng: &mut R, log: &mut TelemetryLog) {
        log.append("Updating sensors.");

        self.speed.update(rng);
        log.append("Speed sensor updated.");

        self.fuel.update(rng);
        log.append("Fuel sensor updated.");

        self.temperature.set_speed(self.speed.read());
        self.temperature.update(rng);
        log.append("Temperature sensor updated.");

        self.battery.update(rng);
        log.append("Battery updated.");

        self.radar.update(rng);
        log.append("Radar sensor updated.");
    }
}
