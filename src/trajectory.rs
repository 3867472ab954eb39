//! Trajectory generation and termination detection

use crate::automaton::next_state;
use crate::error::{Error, Result};
use crate::grid::Grid;
use std::fmt;

/// Why a trajectory stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Converged, // last two grids equal (fixed point)
    Cycled,    // last grid equals the initial grid
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "converged"),
            Termination::Cycled => write!(f, "cycled"),
        }
    }
}

/// Terminal condition plus the index of the last recorded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub termination: Termination,
    pub step: usize,
}

/// Every grid visited from the initial state to termination.
///
/// Index 0 is the initial grid, index k the state after k steps. Only
/// read access is exposed; the history is frozen once generation stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    states: Vec<Grid>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a generated trajectory, which holds at least the
    /// initial grid and one successor.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Grid> {
        self.states.get(step)
    }

    pub fn initial(&self) -> &Grid {
        &self.states[0]
    }

    pub fn last(&self) -> &Grid {
        &self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[Grid] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.states.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// Append-only history used while stepping
struct Recorder {
    states: Vec<Grid>,
}

impl Recorder {
    fn new(initial: Grid) -> Self {
        Self { states: vec![initial] }
    }

    fn steps(&self) -> usize {
        self.states.len() - 1
    }

    /// Take one step. Returns the classification if the new grid is terminal.
    fn advance(&mut self) -> Option<Classification> {
        let current = &self.states[self.states.len() - 1];
        let next = next_state(current);

        // Converged wins over Cycled when both hold
        let termination = if next == *current {
            Some(Termination::Converged)
        } else if next == self.states[0] {
            Some(Termination::Cycled)
        } else {
            None
        };

        self.states.push(next);
        log::trace!("step {}", self.steps());

        termination.map(|termination| {
            let classification = Classification {
                termination,
                step: self.steps(),
            };
            log::debug!("{} at step {}", termination, classification.step);
            classification
        })
    }

    fn freeze(self) -> Trajectory {
        Trajectory { states: self.states }
    }
}

/// Step from `initial` until the grid stops changing or returns to `initial`.
///
/// Only a return to the exact initial grid counts as a cycle. A trajectory
/// that falls into a loop not containing `initial` never terminates; use
/// [`generate_trajectory_bounded`] when that matters.
pub fn generate_trajectory(initial: Grid) -> (Trajectory, Classification) {
    let mut recorder = Recorder::new(initial);
    loop {
        if let Some(classification) = recorder.advance() {
            return (recorder.freeze(), classification);
        }
    }
}

/// Same as [`generate_trajectory`], giving up after `max_steps` transitions.
pub fn generate_trajectory_bounded(
    initial: Grid,
    max_steps: usize,
) -> Result<(Trajectory, Classification)> {
    let mut recorder = Recorder::new(initial);
    while recorder.steps() < max_steps {
        if let Some(classification) = recorder.advance() {
            return Ok((recorder.freeze(), classification));
        }
    }
    log::warn!("gave up after {} steps", max_steps);
    Err(Error::StepLimit { limit: max_steps })
}
