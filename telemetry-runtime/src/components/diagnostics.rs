use crate::{
    runtime::{Component, ComponentContext},
    vehicle::Vehicle,
};

/// Diagnostic check.
///
/// Each check compares a single reading against a fixed threshold. The speed
/// check warns when the reading is above its threshold, every other check warns
/// when the reading is below its threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Check {
    /// Vehicle speed in km/h.
    Speed,
    /// Fuel level in liters.
    Fuel,
    /// Engine temperature in degrees Celsius.
    Temperature,
    /// Battery charge in percent.
    BatteryCharge,
    /// Battery temperature in degrees Celsius.
    BatteryTemperature,
    /// Distance to the vehicle ahead in meters.
    RadarDistance,
}

impl Check {
    /// All checks in reporting order.
    pub const ALL: [Check; 6] = [
        Check::Speed,
        Check::Fuel,
        Check::Temperature,
        Check::BatteryCharge,
        Check::BatteryTemperature,
        Check::RadarDistance,
    ];

    /// Name of the check as it appears in the log.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Speed => "Speed",
            Check::Fuel => "Fuel",
            Check::Temperature => "Temperature",
            Check::BatteryCharge => "Battery Charge",
            Check::BatteryTemperature => "Battery Temperature",
            Check::RadarDistance => "Radar Distance",
        }
    }

    /// Fixed threshold of the check.
    pub fn threshold(&self) -> f64 {
        match self {
            Check::Speed => 120.0,
            Check::Fuel => 5.0,
            Check::Temperature => 90.0,
            Check::BatteryCharge => 20.0,
            Check::BatteryTemperature => 40.0,
            Check::RadarDistance => 20.0,
        }
    }

    /// Message reported when the check fires.
    pub fn message(&self) -> &'static str {
        match self {
            Check::Speed => "High speed detected!",
            Check::Fuel => "Low fuel level!",
            Check::Temperature => "Engine overheating!",
            Check::BatteryCharge => "Low battery charge!",
            Check::BatteryTemperature => "Battery overheating!",
            Check::RadarDistance => "Vehicle ahead too close!",
        }
    }

    /// Take the reading this check inspects.
    pub fn read(&self, vehicle: &Vehicle) -> f64 {
        match self {
            Check::Speed => vehicle.speed.read(),
            Check::Fuel => vehicle.fuel.read(),
            Check::Temperature => vehicle.temperature.read(),
            Check::BatteryCharge => vehicle.battery.charge(),
            Check::BatteryTemperature => vehicle.battery.temperature(),
            Check::RadarDistance => vehicle.radar.read(),
        }
    }

    /// Whether `value` is out of range for `threshold`.
    ///
    /// Both temperature checks fire below their threshold, like every other
    /// check except speed.
    #[inline]
    pub fn fires(&self, value: f64, threshold: f64) -> bool {
        match self {
            Check::Speed => value > threshold,
            _ => value < threshold,
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Warning raised by a diagnostic check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Warning {
    /// Check which fired.
    pub check: Check,
    /// Offending reading.
    pub value: f64,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Warning: {}", self.check.message())
    }
}

/// Run a single check against an explicit threshold.
pub fn check(check: Check, value: f64, threshold: f64) -> Option<Warning> {
    check
        .fires(value, threshold)
        .then_some(Warning { check, value })
}

/// Single reading in a diagnostics report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub check: Check,
    pub value: f64,
    pub warning: Option<Warning>,
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} read: {:.2}", self.check.name(), self.value)
    }
}

/// Diagnostics report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Readings in check order.
    pub readings: Vec<Reading>,
}

impl Report {
    /// Iterate over the warnings in this report.
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.readings
            .iter()
            .filter_map(|reading| reading.warning.as_ref())
    }

    /// Whether the given check fired.
    pub fn has_warning(&self, check: Check) -> bool {
        self.warnings().any(|warning| warning.check == check)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Diagnostics Report ---")?;
        for warning in self.warnings() {
            writeln!(f, "{}", warning)?;
        }
        writeln!(f, "--- End of Diagnostics ---")
    }
}

/// Run every check against the vehicle.
pub fn run(vehicle: &Vehicle) -> Report {
    let readings = Check::ALL
        .into_iter()
        .map(|c| {
            let value = c.read(vehicle);

            Reading {
                check: c,
                value,
                warning: check(c, value, c.threshold()),
            }
        })
        .collect();

    Report { readings }
}

/// Vehicle diagnostics.
///
/// Records every reading in the telemetry log and reports the warnings on
/// standard output. A warning never stops the simulation.
pub struct Diagnostics;

impl<Cnf: Clone> Component<Cnf> for Diagnostics {
    fn new(_config: Cnf) -> Self
    where
        Self: Sized,
    {
        Self
    }

    fn tick(&mut self, ctx: &mut ComponentContext) {
        ctx.log.append("Running diagnostics.");

        let report = run(&ctx.vehicle);

        for reading in &report.readings {
            ctx.log.append(reading.to_string());

            if let Some(warning) = reading.warning {
                ctx.log.append(warning.to_string());
                log::warn!("{} ({:.2})", warning.check.message(), warning.value);
            }
        }

        println!("\n{}", report);
    }
}
