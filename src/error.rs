//! Reasons a command line is rejected.
//!
//! None of these ever leave the interpreter: a rejected line is logged and the
//! robot keeps its prior state.

use thiserror::Error;

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word of the line is not one of the five command names.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// PLACE with nothing after it.
    #[error("PLACE requires an argument of the form x,y,FACING")]
    MissingArgument,

    /// The argument did not split into exactly three comma-separated parts.
    #[error("malformed placement '{0}'")]
    MalformedPlacement(String),

    /// An `x` or `y` token that is not a base-10 integer.
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    /// Not exactly `NORTH`, `EAST`, `SOUTH` or `WEST`.
    #[error("unknown facing '{0}'")]
    UnknownFacing(String),

    /// Coordinates parsed but fall outside the grid.
    #[error("placement ({x}, {y}) is off the grid")]
    OffGrid { x: i32, y: i32 },
}
