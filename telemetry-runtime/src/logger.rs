use std::{
    fs::OpenOptions,
    io::{LineWriter, Write},
    path::{Path, PathBuf},
};

/// Append-only telemetry log.
///
/// Every record is written as a single line prefixed with the local time:
///
/// ```text
/// 2024-03-01 14:02:11 - Speed sensor updated.
/// ```
///
/// The log is opened once at startup. If a write fails later on the failure is
/// reported on the operational log and the telemetry log is disabled, the
/// simulation itself is never interrupted.
pub struct TelemetryLog {
    path: Option<PathBuf>,
    writer: Option<Box<dyn Write + Send>>,
}

impl TelemetryLog {
    /// Open the telemetry log at `path` in append mode.
    ///
    /// The file is created if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> crate::runtime::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| crate::Error::LogSink(path.clone(), e))?;

        log::debug!("Telemetry log opened at {}", path.display());

        Ok(Self {
            path: Some(path),
            writer: Some(Box::new(LineWriter::new(file))),
        })
    }

    /// Construct a telemetry log on top of any writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            path: None,
            writer: Some(Box::new(writer)),
        }
    }

    /// Construct a telemetry log which discards every record.
    pub fn disabled() -> Self {
        Self {
            path: None,
            writer: None,
        }
    }

    /// Whether records are still being written.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Path of the log file, if backed by a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append a record to the log.
    pub fn append<S: AsRef<str>>(&mut self, message: S) {
        let message = message.as_ref();

        log::trace!("{}", message);

        if let Some(writer) = self.writer.as_mut() {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

            if let Err(e) = writeln!(writer, "{} - {}", timestamp, message) {
                log::error!("Failed to write telemetry log: {}", e);
                log::warn!("Telemetry log disabled");

                self.writer = None;
            }
        }
    }

    /// Flush any buffered records.
    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                log::error!("Failed to flush telemetry log: {}", e);
                log::warn!("Telemetry log disabled");

                self.writer = None;
            }
        }
    }
}

impl std::fmt::Debug for TelemetryLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryLog")
            .field("path", &self.path)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Drop for TelemetryLog {
    fn drop(&mut self) {
        self.flush();
    }
}
