//! Roto Box entry point
//!
//! Headless host loop: drives the simulation at a fixed timestep and logs
//! world summaries once per simulated second. Windowing, drawing and
//! frame capture are the embedding application's business; this binary
//! stands in for it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use roto_box::Config;
use roto_box::sim::{SimState, tick};

#[derive(Parser, Debug)]
#[command(about = "Bouncing balls inside a rotating square container")]
struct Args {
    /// RNG seed for the run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON config file; defaults apply for missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated duration in seconds
    #[arg(long, default_value_t = 90.0)]
    duration: f32,
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_json(&json).context("parsing config")?
        }
        None => Config::default(),
    };
    config.validate().context("invalid config")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    log::info!(
        "Roto Box starting: seed {}, {:.0}s at {:.0} Hz",
        args.seed,
        args.duration,
        config.tick_rate
    );
    log::debug!("effective config:\n{}", config.to_json()?);

    let dt = 1.0 / config.tick_rate;
    let total_ticks = (args.duration * config.tick_rate).ceil() as u64;
    let ticks_per_second = (config.tick_rate.round() as u64).max(1);

    let mut state = SimState::new(config, args.seed);
    for _ in 0..total_ticks {
        tick(&mut state, dt);

        if state.time_ticks % ticks_per_second == 0 {
            let corner = state.frame.corners()[0];
            log::info!(
                "t={:>3}s bodies={:>2} angle={:.3} corner0=({:.1}, {:.1})",
                state.time_ticks / ticks_per_second,
                state.bodies.len(),
                state.frame.angle,
                corner.x,
                corner.y
            );
        }
    }

    log::info!(
        "done: {} bodies after {} ticks",
        state.bodies.len(),
        state.time_ticks
    );
    Ok(())
}
