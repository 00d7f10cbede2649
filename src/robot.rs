//! Robot state and the commands that drive it.

use crate::error::CommandError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compass facing. Variants are declared in clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings, clockwise starting from north.
    pub const CLOCKWISE: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Returns the facing one quarter turn away, clockwise or counter-clockwise.
    pub fn rotate(self, clockwise: bool) -> Self {
        let len = Self::CLOCKWISE.len();
        let offset = if clockwise { 1 } else { len - 1 };
        Self::CLOCKWISE[(self as usize + offset) % len]
    }

    /// Unit step on the grid. `x` grows eastward, `y` grows northward.
    pub fn step(self) -> IVec2 {
        match self {
            Facing::North => IVec2::Y,
            Facing::East => IVec2::X,
            Facing::South => IVec2::NEG_Y,
            Facing::West => IVec2::NEG_X,
        }
    }

    /// The upper-case name used in PLACE arguments and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facing {
    type Err = CommandError;

    /// Exact, case-sensitive match against the upper-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CLOCKWISE
            .into_iter()
            .find(|facing| facing.as_str() == s)
            .ok_or_else(|| CommandError::UnknownFacing(s.to_string()))
    }
}

/// Where the robot is, if anywhere.
///
/// States produced by [`RobotInterpreter`](crate::RobotInterpreter) always keep a
/// `Placed` robot inside the interpreter's grid. A state built or deserialized by
/// hand is not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    /// No successful PLACE yet. Every command but PLACE is a no-op here.
    #[default]
    Unplaced,
    /// On the grid at `position`, pointing `facing`.
    Placed { position: IVec2, facing: Facing },
}

impl RobotState {
    /// Returns `true` once a PLACE has succeeded.
    pub fn is_placed(&self) -> bool {
        matches!(self, RobotState::Placed { .. })
    }

    /// Grid cell of a placed robot.
    pub fn position(&self) -> Option<IVec2> {
        match self {
            RobotState::Placed { position, .. } => Some(*position),
            RobotState::Unplaced => None,
        }
    }

    /// Facing of a placed robot.
    pub fn facing(&self) -> Option<Facing> {
        match self {
            RobotState::Placed { facing, .. } => Some(*facing),
            RobotState::Unplaced => None,
        }
    }

    /// Rotates a placed robot a quarter turn in place. Unplaced robots are returned as-is.
    pub fn rotated(self, clockwise: bool) -> Self {
        match self {
            RobotState::Placed { position, facing } => RobotState::Placed {
                position,
                facing: facing.rotate(clockwise),
            },
            RobotState::Unplaced => self,
        }
    }

    /// The `x,y,FACING` line a REPORT emits, or `None` while unplaced.
    pub fn report(&self) -> Option<String> {
        match self {
            RobotState::Placed { position, facing } => {
                Some(format!("{},{},{}", position.x, position.y, facing))
            }
            RobotState::Unplaced => None,
        }
    }
}

/// A recognized command. Only these five names are ever dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot at `position` facing `facing` (`PLACE x,y,FACING`).
    /// Bounds are checked against the grid when the command is applied.
    Place { position: IVec2, facing: Facing },
    /// Advance one cell in the current facing (`MOVE`).
    Move,
    /// Quarter turn counter-clockwise (`LEFT`).
    Left,
    /// Quarter turn clockwise (`RIGHT`).
    Right,
    /// Emit the current state to the report sink (`REPORT`).
    Report,
}

impl Command {
    /// Parses one input line.
    ///
    /// Surrounding whitespace is trimmed and the line is split on its first
    /// whitespace run into a command name and an argument. Blank lines yield
    /// `Ok(None)`. Arguments to commands other than PLACE are ignored.
    pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim_start())),
            None => (line, None),
        };

        let command = match name {
            "PLACE" => parse_placement(arg.ok_or(CommandError::MissingArgument)?)?,
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_placement(arg: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = arg.split(',').collect();
    let [x, y, facing] = parts.as_slice() else {
        return Err(CommandError::MalformedPlacement(arg.to_string()));
    };

    Ok(Command::Place {
        position: IVec2::new(parse_coordinate(x)?, parse_coordinate(y)?),
        facing: facing.parse()?,
    })
}

fn parse_coordinate(token: &str) -> Result<i32, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidCoordinate(token.to_string()))
}
