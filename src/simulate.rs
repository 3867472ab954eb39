//! Glue between input collection, the trajectory generator and rendering

use crate::config::{DisplayMode, RunConfig};
use crate::error::Result;
use crate::grid::Grid;
use crate::prompt;
use crate::render;
use crate::trajectory::{generate_trajectory, generate_trajectory_bounded, Classification, Trajectory};
use rand::prelude::*;
use std::io::{BufRead, Write};
use std::mem::size_of;

/// Upper bound on memory held by a recorded trajectory (1 GiB)
pub const TRAJECTORY_BYTE_BUDGET: usize = 1 << 30;

/// Run a simulation using the process's stdin and stdout
pub fn run(config: RunConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_with(config, &mut input, &mut output)
}

/// Build the initial grid, generate once, hand the result to the renderers.
pub fn run_with<R: BufRead, W: Write>(config: RunConfig, input: &mut R, output: &mut W) -> Result<()> {
    let size = match config.size {
        Some(size) => size,
        None => prompt::read_size(input, output)?,
    };

    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    log::info!("{}x{} grid, density {}, seed {}", size, size, config.density, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let initial = Grid::random(size, config.density, &mut rng)?;

    let (trajectory, classification) = simulate(initial, step_ceiling(config.max_steps, size))?;
    writeln!(output, "{}", render::report_line(&classification))?;

    if let Some(path) = &config.gif {
        render::gif::write_gif(path, &trajectory, &config.render)?;
        writeln!(output, "Animation saved as '{}'", path.display())?;
    }

    match config.display {
        DisplayMode::Print => render::write_frames(output, &trajectory)?,
        DisplayMode::Play => render::playback::run(&trajectory, &classification, &config.render)?,
        DisplayMode::None => {}
    }

    Ok(())
}

/// Lower a configured ceiling so the recorded states of an N×N run fit in
/// `TRAJECTORY_BYTE_BUDGET`. `None` (ceiling disabled) is left alone.
pub fn step_ceiling(configured: Option<usize>, size: usize) -> Option<usize> {
    let limit = configured?;
    let per_state = size.saturating_mul(size).saturating_add(size_of::<Grid>());
    // one slot is taken by the initial grid
    let fits = (TRAJECTORY_BYTE_BUDGET / per_state).saturating_sub(1).max(1);
    if fits < limit {
        log::info!(
            "step ceiling lowered from {} to {} to keep a {}x{} trajectory under {} MiB",
            limit,
            fits,
            size,
            size,
            TRAJECTORY_BYTE_BUDGET >> 20
        );
    }
    Some(limit.min(fits))
}

/// Generate with or without a step ceiling
pub fn simulate(initial: Grid, max_steps: Option<usize>) -> Result<(Trajectory, Classification)> {
    match max_steps {
        Some(limit) => generate_trajectory_bounded(initial, limit),
        None => Ok(generate_trajectory(initial)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::error::Error;
    use std::io::Cursor;
    use std::time::Duration;

    fn config() -> RunConfig {
        RunConfig {
            size: Some(3),
            seed: Some(42),
            density: 0.5,
            max_steps: Some(1000),
            display: DisplayMode::None,
            gif: None,
            render: RenderConfig {
                frame_delay: Duration::from_millis(500),
                cell_px: 4,
                color_scheme: 0,
                draw_char: '#',
            },
        }
    }

    fn run_to_string(config: RunConfig, stdin: &str) -> Result<String> {
        let mut input = Cursor::new(stdin.to_string());
        let mut output = Vec::new();
        run_with(config, &mut input, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn reports_termination() {
        let text = run_to_string(config(), "").unwrap();
        assert!(text.starts_with("Matrix "), "{text}");
        assert!(text.trim_end().ends_with('.'));
    }

    #[test]
    fn same_seed_same_output() {
        let mut print = config();
        print.display = DisplayMode::Print;
        let a = run_to_string(print.clone(), "").unwrap();
        let b = run_to_string(print, "").unwrap();
        assert_eq!(a, b);
        assert!(a.contains("Step 0\n"));
    }

    #[test]
    fn prompts_when_size_missing() {
        let mut cfg = config();
        cfg.size = None;
        let text = run_to_string(cfg, "1\n").unwrap();
        assert_eq!(
            text,
            format!("{}Matrix converged at step 1.\n", prompt::SIZE_PROMPT)
        );
    }

    #[test]
    fn bad_prompt_answer_is_invalid_input() {
        let mut cfg = config();
        cfg.size = None;
        let err = run_to_string(cfg, "-4\n").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn empty_grid_converges() {
        let mut cfg = config();
        cfg.size = Some(0);
        let text = run_to_string(cfg, "").unwrap();
        assert_eq!(text, "Matrix converged at step 1.\n");
    }

    #[test]
    fn step_limit_surfaces() {
        let center: Grid = "000\n010\n000".parse().unwrap();
        let err = simulate(center.clone(), Some(1)).unwrap_err();
        assert!(matches!(err, Error::StepLimit { limit: 1 }));
        let (_, class) = simulate(center, None).unwrap();
        assert_eq!(class.step, 2);
    }

    #[test]
    fn ceiling_shrinks_for_large_grids() {
        let per_state = 2000 * 2000 + size_of::<Grid>();
        let fits = TRAJECTORY_BYTE_BUDGET / per_state - 1;
        assert!(fits < 1000);
        assert_eq!(step_ceiling(Some(100_000), 2000), Some(fits));
        // whole trajectory at the lowered ceiling stays within budget
        assert!((fits + 1) * per_state <= TRAJECTORY_BYTE_BUDGET);
    }

    #[test]
    fn ceiling_kept_for_small_grids() {
        assert_eq!(step_ceiling(Some(100_000), 8), Some(100_000));
        assert_eq!(step_ceiling(Some(7), 0), Some(7));
        assert_eq!(step_ceiling(None, 5000), None);
    }

    #[test]
    fn huge_grid_still_gets_one_step() {
        assert_eq!(step_ceiling(Some(10), usize::MAX), Some(1));
    }

    #[test]
    fn exports_gif() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.gif");
        let mut cfg = config();
        cfg.gif = Some(path.clone());
        let text = run_to_string(cfg, "").unwrap();
        assert!(path.exists());
        assert!(text.contains("Animation saved as"));
    }
}
