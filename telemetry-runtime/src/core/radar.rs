use rand::Rng;

/// Closest distance the radar reports, in meters.
pub const RADAR_RANGE_MIN: f64 = 10.0;
/// Furthest distance the radar reports, in meters.
pub const RADAR_RANGE_MAX: f64 = 200.0;

/// Forward radar measuring the distance to the vehicle ahead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarSensor {
    /// Distance in meters.
    distance: f64,
}

impl Default for RadarSensor {
    fn default() -> Self {
        Self { distance: 100.0 }
    }
}

impl RadarSensor {
    /// Draw a new distance between 10 and 200 meters.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.distance = rng.gen_range((RADAR_RANGE_MIN as u32)..=(RADAR_RANGE_MAX as u32)) as f64;
    }

    /// Current distance in meters.
    #[inline]
    pub fn read(&self) -> f64 {
        self.distance
    }

    /// Override the distance, clamped to the radar range.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance.clamp(RADAR_RANGE_MIN, RADAR_RANGE_MAX);
    }
}

impl std::fmt::Display for RadarSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Front Vehicle Distance: {:.2} meters", self.distance)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_radar_update_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut sensor = RadarSensor::default();

        for _ in 0..1_000 {
            sensor.update(&mut rng);
            assert!((RADAR_RANGE_MIN..=RADAR_RANGE_MAX).contains(&sensor.read()));
        }
    }

    #[test]
    fn test_radar_set_clamp() {
        let mut sensor = RadarSensor::default();

        sensor.set_distance(2.0);
        assert_eq!(sensor.read(), 10.0);
        sensor.set_distance(15.0);
        assert_eq!(sensor.read(), 15.0);
        sensor.set_distance(500.0);
        assert_eq!(sensor.read(), 200.0);
    }
}
