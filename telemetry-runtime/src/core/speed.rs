use rand::Rng;

/// Highest speed the sensor reports, in km/h.
pub const SPEED_MAX: f64 = 200.0;

/// Vehicle speed sensor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeedSensor {
    /// Speed in km/h.
    speed: f64,
}

impl SpeedSensor {
    /// Draw a new speed reading between 0 and 200 km/h.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.speed = rng.gen_range(0..=SPEED_MAX as u32) as f64;
    }

    /// Current speed in km/h.
    #[inline]
    pub fn read(&self) -> f64 {
        self.speed
    }

    /// Override the speed reading, clamped to the sensor range.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.0, SPEED_MAX);
    }
}

impl std::fmt::Display for SpeedSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Speed: {:.0} km/h", self.speed)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_speed_update_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sensor = SpeedSensor::default();

        for _ in 0..1_000 {
            sensor.update(&mut rng);
            assert!((0.0..=SPEED_MAX).contains(&sensor.read()));
            assert_eq!(sensor.read().fract(), 0.0);
        }
    }

    #[test]
    fn test_speed_set_clamp() {
        let mut sensor = SpeedSensor::default();

        sensor.set_speed(250.0);
        assert_eq!(sensor.read(), 200.0);
        sensor.set_speed(-5.0);
        assert_eq!(sensor.read(), 0.0);
    }

    #[test]
    fn test_speed_display() {
        let mut sensor = SpeedSensor::default();
        sensor.set_speed(130.0);

        assert_eq!(sensor.to_string(), "Speed: 130 km/h");
    }
}
