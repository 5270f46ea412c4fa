/// Engine control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineControlUnit {
    /// Throttle position in percent.
    throttle_position: f64,
}

impl EngineControlUnit {
    /// Set the throttle position, clamped between 0 and 100 percent.
    pub fn set_throttle_position(&mut self, position: f64) {
        self.throttle_position = position.clamp(0.0, 100.0);
    }

    /// Throttle position in percent.
    #[inline]
    pub fn throttle_position(&self) -> f64 {
        self.throttle_position
    }
}

/// Brake control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrakeControlUnit {
    /// Brake pressure in percent.
    brake_pressure: f64,
}

impl BrakeControlUnit {
    /// Set the brake pressure, clamped between 0 and 100 percent.
    pub fn set_brake_pressure(&mut self, pressure: f64) {
        self.brake_pressure = pressure.clamp(0.0, 100.0);
    }

    /// Brake pressure in percent.
    #[inline]
    pub fn brake_pressure(&self) -> f64 {
        self.brake_pressure
    }
}

/// Lowest selectable gear.
pub const GEAR_MIN: u8 = 1;
/// Highest selectable gear.
pub const GEAR_MAX: u8 = 6;

/// Transmission control unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransmissionControlUnit {
    gear: u8,
}

impl Default for TransmissionControlUnit {
    fn default() -> Self {
        Self { gear: GEAR_MIN }
    }
}

impl TransmissionControlUnit {
    /// Change gear, clamped between first and sixth.
    pub fn change_gear(&mut self, gear: i32) {
        self.gear = gear.clamp(GEAR_MIN as i32, GEAR_MAX as i32) as u8;
    }

    /// Current gear.
    #[inline]
    pub fn gear(&self) -> u8 {
        self.gear
    }
}
