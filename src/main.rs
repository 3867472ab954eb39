use clap::{Parser, Subcommand};
use paritylife::config::{frame_delay, DisplayMode, RunConfig};
use paritylife::settings::Settings;
use paritylife::{next_state, simulate, Error, Grid};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "paritylife")]
#[command(version)]
#[command(about = "Parity-flip cellular automaton: step an NxN grid until it settles or cycles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a random grid until it converges or returns to its start
    Run {
        /// Grid size N (prompted for when omitted)
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Probability of a cell starting as 1 (0.0-1.0)
        #[arg(short, long)]
        density: Option<f64>,

        /// Give up after this many steps (0 = no limit). Large grids get a
        /// lower ceiling so the recorded trajectory stays under 1 GiB.
        #[arg(short, long)]
        max_steps: Option<usize>,

        /// How to show the frames: print, play, none
        #[arg(short = 'D', long, default_value = "none")]
        display: String,

        /// Export the trajectory as an animated GIF
        #[arg(short, long)]
        gif: Option<PathBuf>,

        /// Seconds per frame for playback and GIF export
        #[arg(short = 't', long, allow_negative_numbers = true)]
        delay: Option<f32>,

        /// Color scheme (0-9)
        #[arg(short = 'C', long)]
        scheme: Option<u8>,

        /// Character used for live cells in playback
        #[arg(short, long, default_value = "#")]
        char: String,
    },

    /// Read a grid from a file of 0/1 rows and print its next state
    Step {
        /// Grid file
        file: PathBuf,

        /// Number of steps to apply
        #[arg(short = 'k', long, default_value = "1")]
        steps: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> paritylife::Result<()> {
    match command {
        Commands::Run {
            size,
            seed,
            density,
            max_steps,
            display,
            gif,
            delay,
            scheme,
            char: draw_char,
        } => {
            let settings = Settings::load();
            let mut config = RunConfig::from_settings(&settings)?;

            config.size = size;
            config.seed = seed;
            if let Some(density) = density {
                config.density = density;
            }
            if let Some(limit) = max_steps {
                config.max_steps = Some(limit).filter(|&n| n > 0);
            }
            config.display = DisplayMode::parse(&display).ok_or_else(|| {
                Error::invalid(format!("unknown display mode '{}' (print, play, none)", display))
            })?;
            config.gif = gif;
            if let Some(delay) = delay {
                config.render.frame_delay = frame_delay(delay)?;
            }
            if let Some(scheme) = scheme {
                config.render.color_scheme = scheme.min(9);
            }
            config.render.draw_char = draw_char.chars().next().unwrap_or('#');

            simulate::run(config)
        }
        Commands::Step { file, steps } => {
            let text = fs::read_to_string(&file)?;
            let mut grid: Grid = text.parse()?;
            for _ in 0..steps {
                grid = next_state(&grid);
            }
            print!("{}", grid);
            Ok(())
        }
    }
}
