use std::{error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    /// Telemetry log could not be opened.
    LogSink(PathBuf, io::Error),
    /// Configuration file could not be read.
    ConfigIo(io::Error),
    /// Configuration file could not be parsed.
    ConfigParse(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LogSink(path, e) => {
                write!(f, "failed to open log file {}: {}", path.display(), e)
            }
            Error::ConfigIo(e) => write!(f, "failed to read configuration: {}", e),
            Error::ConfigParse(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::LogSink(_, e) => Some(e),
            Error::ConfigIo(e) => Some(e),
            Error::ConfigParse(e) => Some(e),
        }
    }
}
