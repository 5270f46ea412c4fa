// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::Parser;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Vehicle telemetry simulator", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", alias = "conf", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Telemetry log file.
    #[arg(short = 'l', long, value_name = "FILE")]
    log_file: Option<std::path::PathBuf>,
    /// Tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,
    /// Seed for the sensor simulation.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks.
    #[arg(long)]
    ticks: Option<u64>,
    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut config: telemetry::Config = match &args.config {
        Some(path) => telemetry::from_file(path)?,
        None => telemetry::Config::default(),
    };

    if let Some(log_file) = args.log_file {
        config.log.path = log_file;
    }
    if let Some(interval) = args.interval {
        config.simulation.interval = interval;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    if args.ticks.is_some() {
        config.simulation.ticks = args.ticks;
    }

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_offset_to_local().ok();
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    // Standard output is reserved for the dashboard.
    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    log::trace!("{:#?}", config);

    log::info!("Telemetry runtime version {}", telemetry::consts::VERSION);
    log::info!("Telemetry log at {}", config.log.path.display());

    let mut runtime = telemetry::Runtime::new(&config)?;
    runtime.enable_term_shutdown();

    let pipe = telemetry::components::vehicle_pipeline(config.clone());

    runtime
        .run_interval(pipe, config.simulation.interval())
        .await;

    log::debug!("{} was shutdown gracefully", env!("CARGO_BIN_NAME"));

    Ok(())
}
