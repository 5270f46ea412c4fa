use std::path::{Path, PathBuf};

use crate::consts;

/// Telemetry log configuration.
#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Telemetry log file. Records are appended.
    #[serde(default = "LogConfig::default_path")]
    pub path: PathBuf,
}

impl LogConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(consts::DEFAULT_LOG_PATH)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Clone, Debug, serde_derive::Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "SimulationConfig::default_interval")]
    pub interval: u64,
    /// Random number generator seed.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop after this many ticks.
    #[serde(default)]
    pub ticks: Option<u64>,
}

impl SimulationConfig {
    fn default_interval() -> u64 {
        consts::DEFAULT_TICK_INTERVAL
    }

    /// Tick interval, clamped to the supported range.
    pub fn interval(&self) -> std::time::Duration {
        let (lower, upper) = consts::TICK_INTERVAL_RANGE;
        std::time::Duration::from_millis(self.interval.clamp(lower, upper))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval: Self::default_interval(),
            seed: None,
            ticks: None,
        }
    }
}

/// Telemetry simulator configuration.
#[derive(Clone, Debug, Default, serde_derive::Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Telemetry log configuration.
    #[serde(default)]
    pub log: LogConfig,
    /// Simulation configuration.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl std::str::FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(crate::Error::ConfigParse)
    }
}

/// Read and parse a configuration file.
pub fn from_file<T, P>(path: P) -> crate::runtime::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let contents = std::fs::read_to_string(path).map_err(crate::Error::ConfigIo)?;

    toml::from_str(&contents).map_err(crate::Error::ConfigParse)
}
