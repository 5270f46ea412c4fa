use std::time::Duration;

use crate::{logger::TelemetryLog, Config};

mod component;
mod error;
mod pipeline;

pub use self::component::{Component, ComponentContext};
pub use self::error::Error;
pub use self::pipeline::Pipeline;

pub type Result<T = ()> = std::result::Result<T, error::Error>;

/// Simulation runtime.
///
/// The runtime owns the component context and drives a pipeline at a fixed
/// interval. Everything runs on the calling task, one tick after the other.
pub struct Runtime {
    /// Component context.
    ctx: ComponentContext,
    /// Runtime event bus.
    shutdown: (
        tokio::sync::broadcast::Sender<()>,
        tokio::sync::broadcast::Receiver<()>,
    ),
    /// Stop after this many ticks.
    max_ticks: Option<u64>,
}

impl Runtime {
    /// Construct the runtime from configuration.
    ///
    /// The telemetry log is opened here. Failing to open the log is fatal.
    pub fn new(config: &Config) -> Result<Self> {
        let log = TelemetryLog::open(&config.log.path)?;

        let mut runtime = Self::with_context(ComponentContext::new(log));
        runtime.max_ticks = config.simulation.ticks;

        Ok(runtime)
    }

    /// Construct the runtime around an existing context.
    pub fn with_context(ctx: ComponentContext) -> Self {
        Self {
            ctx,
            shutdown: tokio::sync::broadcast::channel(1),
            max_ticks: None,
        }
    }

    /// Stop the runtime after `ticks` ticks.
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    /// Retrieve the component context.
    #[inline]
    pub fn context(&self) -> &ComponentContext {
        &self.ctx
    }

    /// Handle to request the runtime to stop.
    ///
    /// The runtime finishes the tick in progress before stopping.
    pub fn shutdown_handle(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown.0.clone()
    }

    /// Stop the runtime on Ctrl-C.
    pub fn enable_term_shutdown(&self) {
        log::debug!("Enable signals shutdown");

        let sender = self.shutdown.0.clone();

        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for termination signal: {}", e);
                return;
            }

            log::info!("Termination requested");

            sender.send(()).ok();
        });
    }

    /// Run the pipeline at a fixed interval.
    ///
    /// The first tick runs immediately. This method returns when the tick limit
    /// is reached or when a shutdown is requested, whichever comes first.
    pub async fn run_interval<Cnf: Clone>(
        &mut self,
        mut pipeline: Pipeline<Cnf>,
        duration: Duration,
    ) {
        let mut interval = tokio::time::interval(duration);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        log::debug!("Running pipeline every {} ms", duration.as_millis());

        loop {
            if let Some(max_ticks) = self.max_ticks {
                if self.ctx.iteration() >= max_ticks {
                    log::debug!("Tick limit of {} reached", max_ticks);
                    break;
                }
            }

            tokio::select! {
                _ = self.shutdown.1.recv() => {
                    log::debug!("Shutting down pipeline");
                    break;
                }
                _ = interval.tick() => {
                    pipeline.tick(&mut self.ctx);
                }
            }
        }

        self.ctx.log.append("Simulation stopped.");
        self.ctx.log.flush();

        log::info!("Simulation stopped after {} ticks", self.ctx.iteration());
    }
}
