//! Interactive collection of the grid size

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

pub const SIZE_PROMPT: &str = "Enter the size N of the NxN matrix: ";

/// Ask for N on `output` and read one line from `input`.
///
/// Negative and non-integer answers are rejected here so the core never
/// sees them.
pub fn read_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    write!(output, "{}", SIZE_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::invalid("no size given"));
    }
    parse_size(line.trim())
}

pub fn parse_size(text: &str) -> Result<usize> {
    if text.starts_with('-') {
        return Err(Error::invalid(format!("size must not be negative, got {}", text)));
    }
    text.parse::<usize>()
        .map_err(|_| Error::invalid(format!("size must be a whole number, got '{}'", text)))
}
