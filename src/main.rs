//! TickPet - Entry Point
//!
//! Builds the trajectory, wires the environment to stdout and runs the pet
//! simulation once.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tickpet::core::config::{InitialFlags, SimulationConfig, DEFAULT_PET_NAME};
use tickpet::core::error::Result;
use tickpet::harness::trajectory::DEFAULT_TRAJECTORY;
use tickpet::harness::{
    Environment, EnvironmentConfig, Trajectory, DEFAULT_RUN_DURATION, RUN_DURATION,
};
use tickpet::simulation::{simulate_pet, Clock, RealClock, VirtualClock};

/// Tick a pet through its moods and keep a log of the run
#[derive(Parser, Debug)]
#[command(name = "tickpet")]
#[command(about = "Run the pet mood simulation inside a small experiment harness")]
struct Args {
    /// Number of ticks to run (overrides the trajectory's run_duration)
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<i64>,

    /// TOML file holding the trajectory name and parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Trajectory name when no params file is given
    #[arg(long, default_value = DEFAULT_TRAJECTORY)]
    trajectory: String,

    /// Where to write the JSON run log
    #[arg(long, default_value = "pet_data.json")]
    output: PathBuf,

    /// Keep the run log in memory only
    #[arg(long)]
    no_output: bool,

    /// Fail instead of replacing an existing run log
    #[arg(long)]
    no_overwrite: bool,

    /// Real time each tick blocks for, in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Skip the real-time wait between ticks
    #[arg(long)]
    no_delay: bool,

    /// Compute the starting flags from the starting energy
    #[arg(long)]
    derived_flags: bool,

    /// Pet name
    #[arg(long, default_value = DEFAULT_PET_NAME)]
    name: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tickpet=info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!("Run failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut trajectory = match &args.params {
        Some(path) => Trajectory::load(path)?,
        None => Trajectory::new(args.trajectory.as_str()),
    };
    if !trajectory.contains(RUN_DURATION) {
        trajectory.add_parameter(RUN_DURATION, DEFAULT_RUN_DURATION)?;
    }
    if let Some(duration) = args.duration {
        trajectory.set_parameter(RUN_DURATION, duration)?;
    }

    let initial_flags = if args.derived_flags {
        InitialFlags::Derived
    } else {
        InitialFlags::Literal
    };
    let config = SimulationConfig::new()
        .with_pet_name(args.name)
        .with_tick_interval(Duration::from_millis(args.interval_ms))
        .with_initial_flags(initial_flags);

    let env_config = EnvironmentConfig {
        filename: (!args.no_output).then_some(args.output),
        overwrite_file: !args.no_overwrite,
    };
    let mut env = Environment::with_trajectory(trajectory, env_config);

    let mut clock: Box<dyn Clock> = if args.no_delay {
        Box::new(VirtualClock::new())
    } else {
        Box::new(RealClock)
    };

    let outcome = env.run(|ctx| simulate_pet(ctx, clock.as_mut(), &config))?;
    tracing::info!(
        "Run {} complete: {} ticks, final energy {}, mood {:?}",
        outcome.record.run_id,
        outcome.value.ticks,
        outcome.value.final_energy,
        outcome.value.final_mood
    );
    Ok(())
}
