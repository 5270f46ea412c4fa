// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `telemetry` library provides the runtime for the vehicle telemetry simulator.
//!
//! The `core` module holds the sensor and control unit models, `vehicle` composes them
//! into a single owned state, and `components` contains the per-tick logic: sensor
//! simulation, adaptive cruise control, the dashboard and diagnostics. The `runtime`
//! module drives a pipeline of components at a fixed interval.
//!
//! Every component receives a `ComponentContext` on each tick. The context owns the
//! vehicle and the telemetry log, there is no process-wide state.

pub mod components;
pub mod core;
pub mod logger;
pub mod runtime;
pub mod vehicle;

mod config;

pub use self::config::*;

pub use rand;

pub use self::runtime::Error;
pub use self::runtime::Runtime;
pub use self::vehicle::Vehicle;

/// Telemetry runtime module containing various constants.
pub mod consts {
    use std::time::Duration;

    /// Telemetry runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use telemetry::consts::VERSION;
    ///
    /// println!("Telemetry runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default telemetry log file, relative to the working directory.
    pub const DEFAULT_LOG_PATH: &str = "telemetry.log";

    /// Default interval between two ticks in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use telemetry::consts::DEFAULT_TICK_INTERVAL;
    ///
    /// assert_eq!(DEFAULT_TICK_INTERVAL, 2_000);
    /// ```
    pub const DEFAULT_TICK_INTERVAL: u64 = 2_000;

    /// Lower and upper bound for the tick interval in milliseconds.
    pub const TICK_INTERVAL_RANGE: (u64, u64) = (10, 60_000);

    /// Component delay threshold.
    ///
    /// A component taking longer than this to tick is reported as delaying the pipeline.
    pub const COMPONENT_DELAY_THRESHOLD: Duration = Duration::from_millis(5);
}
