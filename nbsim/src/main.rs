use nbsim::{bench_forces, bench_step, run, SimulationConfig, Universe};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nbsim", about = "2D direct-summation n-body gravity simulator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Advance a universe for T seconds in steps of dt and print the final state
    #[command(allow_negative_numbers = true)]
    Run {
        /// Total simulated time in seconds (falls back to the config's run.t_end)
        t_end: Option<f64>,
        /// Step size in seconds (falls back to the config's run.dt)
        dt: Option<f64>,
        /// Universe text file; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// YAML file with physical constants and run defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Time the force engine
    Bench,
}

// load here to keep main clean
fn load_config(path: Option<&PathBuf>) -> Result<SimulationConfig> {
    match path {
        Some(p) => Ok(SimulationConfig::from_file(p)?),
        None => Ok(SimulationConfig::default()),
    }
}

fn run_command(t_end: Option<f64>, dt: Option<f64>, input: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let cfg = load_config(config.as_ref())?;

    let t_end = t_end
        .or(cfg.run.as_ref().map(|r| r.t_end))
        .ok_or_else(|| anyhow!("no total time given on the command line or in the config"))?;
    let dt = dt
        .or(cfg.run.as_ref().map(|r| r.dt))
        .ok_or_else(|| anyhow!("no step size given on the command line or in the config"))?;

    let mut universe = match input {
        Some(path) => Universe::from_file(path)?,
        None => Universe::read_from(io::stdin().lock())?,
    };
    universe.set_parameters(cfg.parameters());

    let steps = run(&mut universe, t_end, dt)?;
    tracing::info!(steps, bodies = universe.num_bodies(), "simulation finished");

    universe.write_to(BufWriter::new(io::stdout().lock()))?;
    Ok(())
}

fn main() -> Result<()> {
    // stdout carries the universe text, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Run { t_end, dt, input, config } => run_command(t_end, dt, input, config)?,
        Command::Bench => {
            bench_forces();
            bench_step();
        }
    }

    Ok(())
}
