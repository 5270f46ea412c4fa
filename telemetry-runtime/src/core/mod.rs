pub use self::battery::Battery;
pub use self::ecu::{BrakeControlUnit, EngineControlUnit, TransmissionControlUnit};
pub use self::fuel::FuelSensor;
pub use self::radar::RadarSensor;
pub use self::speed::SpeedSensor;
pub use self::temperature::TemperatureSensor;

pub use self::ecu::{GEAR_MAX, GEAR_MIN};
pub use self::fuel::FUEL_INITIAL;
pub use self::radar::{RADAR_RANGE_MAX, RADAR_RANGE_MIN};
pub use self::speed::SPEED_MAX;
pub use self::temperature::TEMPERATURE_BASELINE;

mod battery;
mod ecu;
mod fuel;
mod radar;
mod speed;
mod temperature;
