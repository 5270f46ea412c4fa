use rand::Rng;

/// Fuel in the tank at startup, in liters.
pub const FUEL_INITIAL: f64 = 50.0;

/// Fuel level sensor.
///
/// Every update consumes between 0.1 and 0.5 liters in steps of 0.1. The level
/// never drops below zero and never increases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuelSensor {
    /// Fuel level in liters.
    level: f64,
}

impl Default for FuelSensor {
    fn default() -> Self {
        Self {
            level: FUEL_INITIAL,
        }
    }
}

impl FuelSensor {
    /// Consume fuel for one tick.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let consumption = rng.gen_range(1..=5) as f64 * 0.1;

        self.level = (self.level - consumption).max(0.0);
    }

    /// Current fuel level in liters.
    #[inline]
    pub fn read(&self) -> f64 {
        self.level
    }

    /// Override the fuel level. Negative levels read as empty.
    pub fn set_level(&mut self, level: f64) {
        self.level = level.max(0.0);
    }
}

impl std::fmt::Display for FuelSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fuel Level: {:.2} liters", self.level)
    }
}
