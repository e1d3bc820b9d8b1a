//! Custom errors used by the library and the grid front-end.

use std::error::Error;
use std::fmt;

/// Failure of the separator enumeration itself. Everything besides a bad
/// terminal is a valid algorithmic outcome and is returned as data.
#[derive(Debug)]
pub enum SeparatorError {
    /// A terminal vertex lies outside the graph's vertex range.
    TerminalOutOfRange { terminal: usize, order: usize },
}

impl fmt::Display for SeparatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TerminalOutOfRange { terminal, order } => write!(
                f,
                "terminal vertex {} is outside the graph of order {}",
                terminal, order
            ),
        }
    }
}

impl Error for SeparatorError {}

/// Failure while reading a grid instance.
#[derive(Debug)]
pub enum InstanceError {
    IoError(std::io::Error),
    BadIntError(std::num::ParseIntError),
    MissingHeader,
    MissingRow(usize),
    ShortRow(usize),
    UnexpectedCell { row: usize, column: usize, cell: char },
    MissingSource,
}

impl From<std::io::Error> for InstanceError {
    fn from(e: std::io::Error) -> InstanceError {
        InstanceError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for InstanceError {
    fn from(e: std::num::ParseIntError) -> InstanceError {
        InstanceError::BadIntError(e)
    }
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "grid: io error: {}", e),
            Self::BadIntError(_) => write!(f, "grid: dimension is not an integer"),
            Self::MissingHeader => write!(f, "grid: missing `rows cols` header"),
            Self::MissingRow(row) => write!(f, "grid: row {} is missing", row),
            Self::ShortRow(row) => write!(f, "grid: row {} is too short", row),
            Self::UnexpectedCell { row, column, cell } => write!(
                f,
                "grid: unexpected cell {:?} at row {}, column {}",
                cell, row, column
            ),
            Self::MissingSource => write!(f, "grid: contains no 's'"),
        }
    }
}

impl Error for InstanceError {}
