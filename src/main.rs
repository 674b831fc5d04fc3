//! Pixel Hockey headless driver
//!
//! Replays a recorded input tape, or runs an idle match for a fixed number of
//! ticks, and prints the result as JSON. Rendering and live keyboard input
//! belong to a front end; this binary only exercises the simulation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pixel_hockey::consts::TICK_RATE_HZ;
use pixel_hockey::sim::{MatchState, TickInput, tick};
use pixel_hockey::{MatchSettings, Tape, replay};

#[derive(Parser)]
#[command(name = "pixel-hockey")]
#[command(about = "Run the Pixel Hockey simulation headless")]
struct Args {
    /// JSON settings file (ignored when replaying a tape)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seed for puck serves (ignored when replaying a tape)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Ticks to run without a tape (default is ten seconds of play)
    #[arg(long, default_value_t = 10 * TICK_RATE_HZ as u64)]
    ticks: u64,

    /// Input tape to replay
    tape: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, String> {
    if let Some(path) = &args.tape {
        let tape = Tape::load(path).map_err(|e| e.to_string())?;
        let outcome = replay::run(&tape).map_err(|e| e.to_string())?;
        match outcome.winner {
            Some(winner) => log::info!("{} PLAYER WINS!", winner),
            None => log::info!("Tape ended after {} ticks without a winner", outcome.ticks),
        }
        return serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string());
    }

    let settings = match &args.settings {
        Some(path) => match MatchSettings::load(path) {
            Ok(settings) => settings,
            Err(e) if e.is_recoverable() => {
                log::warn!("{e}; using default settings");
                MatchSettings::default()
            }
            Err(e) => return Err(e.to_string()),
        },
        None => MatchSettings::default(),
    };

    let mut state = MatchState::new(settings, args.seed).map_err(|e| e.to_string())?;
    let input = TickInput::default();
    for _ in 0..args.ticks {
        if state.phase.is_over() {
            break;
        }
        tick(&mut state, &input);
    }

    serde_json::to_string_pretty(&state.snapshot()).map_err(|e| e.to_string())
}
