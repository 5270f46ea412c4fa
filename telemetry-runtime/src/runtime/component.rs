use crate::{logger::TelemetryLog, vehicle::Vehicle};

/// Component context.
///
/// The component context is provided to each component on each tick. The
/// component context is used to communicate within the component pipeline.
#[derive(Debug)]
pub struct ComponentContext {
    /// Vehicle state.
    pub vehicle: Vehicle,
    /// Telemetry log.
    pub log: TelemetryLog,
    /// Last tick.
    last_tick: std::time::Instant,
    /// Iteration count.
    iteration: u64,
}

impl ComponentContext {
    /// Construct a new component context around a fresh vehicle.
    pub fn new(log: TelemetryLog) -> Self {
        Self::with_vehicle(Vehicle::default(), log)
    }

    /// Construct a new component context around an existing vehicle.
    pub fn with_vehicle(vehicle: Vehicle, log: TelemetryLog) -> Self {
        Self {
            vehicle,
            log,
            last_tick: std::time::Instant::now(),
            iteration: 0,
        }
    }

    /// Time elapsed since the previous tick finished.
    pub fn delta(&self) -> std::time::Duration {
        self.last_tick.elapsed()
    }

    /// Retrieve the iteration count.
    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Called after all components are ticked.
    pub(crate) fn post_tick(&mut self) {
        self.log.flush();
        self.last_tick = std::time::Instant::now();
        self.iteration += 1;
    }
}

pub trait Component<Cnf: Clone> {
    /// Construct a new component.
    ///
    /// This method will be called once on startup.
    /// The component should use this method to initialize itself.
    fn new(config: Cnf) -> Self
    where
        Self: Sized;

    /// Tick the component.
    ///
    /// This method will be called on each tick of the runtime.
    /// How often the runtime ticks is determined by the runtime configuration.
    fn tick(&mut self, ctx: &mut ComponentContext);
}
