//! Parity-flip cellular automaton on an N×N grid.
//!
//! Every cell flips when the sum of its eight neighbors (zero outside the
//! grid) is odd. [`generate_trajectory`] steps a grid until it reaches a
//! fixed point or returns to where it started.

pub mod automaton;
pub mod colors;
pub mod config;
pub mod error;
pub mod grid;
pub mod prompt;
pub mod render;
pub mod settings;
pub mod simulate;
pub mod terminal;
pub mod trajectory;

pub use automaton::next_state;
pub use error::{Error, Result};
pub use grid::Grid;
pub use trajectory::{
    generate_trajectory, generate_trajectory_bounded, Classification, Termination, Trajectory,
};
