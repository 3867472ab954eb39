//! Rendering collaborators
//!
//! Everything here only reads a finished trajectory: the report line, plain
//! text frames, terminal playback (`playback`) and GIF export (`gif`).

pub mod gif;
pub mod playback;

use crate::trajectory::{Classification, Termination, Trajectory};
use std::io::{self, Write};

/// One-line summary of how the run ended
pub fn report_line(classification: &Classification) -> String {
    match classification.termination {
        Termination::Converged => format!("Matrix converged at step {}.", classification.step),
        Termination::Cycled => format!(
            "Matrix cycled back to initial state at step {}.",
            classification.step
        ),
    }
}

/// Write every frame as a "Step k" header followed by the grid's digits
pub fn write_frames<W: Write>(out: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    for (step, grid) in trajectory.iter().enumerate() {
        writeln!(out, "Step {}", step)?;
        write!(out, "{}", grid)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::trajectory::generate_trajectory;

    #[test]
    fn report_lines() {
        let converged = Classification { termination: Termination::Converged, step: 4 };
        let cycled = Classification { termination: Termination::Cycled, step: 2 };
        assert_eq!(report_line(&converged), "Matrix converged at step 4.");
        assert_eq!(report_line(&cycled), "Matrix cycled back to initial state at step 2.");
    }

    #[test]
    fn frames_are_numbered_from_zero() {
        let initial: Grid = "000\n010\n000".parse().unwrap();
        let (trajectory, _) = generate_trajectory(initial);

        let mut out = Vec::new();
        write_frames(&mut out, &trajectory).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Step 0\n0 0 0\n0 1 0\n0 0 0\n\n\
             Step 1\n1 1 1\n1 1 1\n1 1 1\n\n\
             Step 2\n0 0 0\n0 1 0\n0 0 0\n\n"
        );
    }
}
