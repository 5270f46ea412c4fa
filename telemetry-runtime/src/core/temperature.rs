use rand::Rng;

/// Engine temperature at rest, in degrees Celsius.
pub const TEMPERATURE_BASELINE: f64 = 70.0;

/// Engine temperature sensor.
///
/// The temperature follows the last speed pushed with [`TemperatureSensor::set_speed`],
/// plus a small integer fluctuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureSensor {
    /// Temperature in degrees Celsius.
    temperature: f64,
    /// Last known vehicle speed in km/h.
    speed: f64,
}

impl Default for TemperatureSensor {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE_BASELINE,
            speed: 0.0,
        }
    }
}

impl TemperatureSensor {
    /// Recalculate the temperature from the last known speed.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let fluctuation = rng.gen_range(-2..=2) as f64;

        self.temperature = TEMPERATURE_BASELINE + (self.speed * 0.1) + fluctuation;
    }

    /// Current temperature in degrees Celsius.
    #[inline]
    pub fn read(&self) -> f64 {
        self.temperature
    }

    /// Set the speed used for the next update.
    #[inline]
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Last known speed.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Override the temperature reading.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }
}

impl std::fmt::Display for TemperatureSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Engine Temperature: {:.2} °C", self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_temperature_follows_speed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sensor = TemperatureSensor::default();

        sensor.set_speed(100.0);
        for _ in 0..200 {
            sensor.update(&mut rng);
            assert!((78.0..=82.0).contains(&sensor.read()));
        }

        sensor.set_speed(0.0);
        for _ in 0..200 {
            sensor.update(&mut rng);
            assert!((68.0..=72.0).contains(&sensor.read()));
        }
    }

    #[test]
    fn test_temperature_display() {
        assert_eq!(
            TemperatureSensor::default().to_string(),
            "Engine Temperature: 70.00 °C"
        );
    }
}
