use rand::Rng;

/// Traction battery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Battery {
    /// Charge level in percent.
    charge: f64,
    /// Battery temperature in degrees Celsius.
    temperature: f64,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            charge: 100.0,
            temperature: 25.0,
        }
    }
}

impl Battery {
    /// Drain the battery for one tick and let the temperature drift.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let usage = rng.gen_range(0.1..0.3);

        self.charge = (self.charge - usage).max(0.0);
        self.temperature += rng.gen_range(-0.1..0.1);
    }

    /// Charge level in percent.
    #[inline]
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Temperature in degrees Celsius.
    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Override the charge level, clamped between 0 and 100 percent.
    pub fn set_charge(&mut self, charge: f64) {
        self.charge = charge.clamp(0.0, 100.0);
    }

    /// Override the battery temperature.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }
}

impl std::fmt::Display for Battery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Battery Charge: {:.2}%, Battery Temperature: {:.2} °C",
            self.charge, self.temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_battery_drain() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut battery = Battery::default();

        let mut last = battery.charge();
        for _ in 0..1_000 {
            battery.update(&mut rng);

            assert!(battery.charge() <= last);
            assert!(battery.charge() >= 0.0);

            last = battery.charge();
        }

        assert_eq!(battery.charge(), 0.0);
    }

    #[test]
    fn test_battery_temperature_drift() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut battery = Battery::default();

        for _ in 0..10 {
            battery.update(&mut rng);
        }

        assert!((battery.temperature() - 25.0).abs() <= 1.0);
    }

    #[test]
    fn test_battery_display() {
        assert_eq!(
            Battery::default().to_string(),
            "Battery Charge: 100.00%, Battery Temperature: 25.00 °C"
        );
    }
}
