//! Interpreter that folds a block of command text into a final [`RobotState`].
//!
//! The entry point is [`RobotInterpreter`]. Configure it with a [`GridConfig`],
//! then call [`RobotInterpreter::interpret`] (reports go to [`LogSink`]) or
//! [`RobotInterpreter::interpret_with`] to capture reports in your own sink.

use crate::error::CommandError;
use crate::report::{LogSink, ReportSink};
use crate::robot::{Command, Facing, RobotState};
use glam::IVec2;
use tracing::debug;

/// Dimensions of the table the robot moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Valid `x` is `0..width`, west to east.
    pub width: i32,
    /// Number of rows. Valid `y` is `0..height`, south to north.
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

impl GridConfig {
    /// Returns `true` if `position` lies on the grid.
    pub fn contains(&self, position: IVec2) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

/// Interprets robot command text against a fixed grid.
#[derive(Clone, Debug, Default)]
pub struct RobotInterpreter {
    config: GridConfig,
}

impl RobotInterpreter {
    /// Creates an interpreter for the grid described by `config`.
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// The grid this interpreter checks placements and moves against.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Interprets `input`, writing every REPORT to [`LogSink`].
    pub fn interpret(&self, input: &str) -> RobotState {
        self.interpret_with(input, &mut LogSink)
    }

    /// Interprets `input` line by line, starting from an unplaced robot.
    ///
    /// Lines that do not parse (unknown names, malformed PLACE arguments) are
    /// logged and skipped. Nothing in the input can stop the fold early.
    pub fn interpret_with<S: ReportSink + ?Sized>(&self, input: &str, sink: &mut S) -> RobotState {
        input
            .lines()
            .enumerate()
            .fold(RobotState::Unplaced, |state, (index, line)| {
                match Command::parse_line(line) {
                    Ok(Some(command)) => self.apply(state, &command, &mut *sink),
                    Ok(None) => state,
                    Err(error) => {
                        debug!(line = index + 1, %error, "ignoring command");
                        state
                    }
                }
            })
    }

    /// Applies a single command and returns the next state.
    pub fn apply<S: ReportSink + ?Sized>(
        &self,
        state: RobotState,
        command: &Command,
        sink: &mut S,
    ) -> RobotState {
        match *command {
            Command::Place { position, facing } => {
                self.place(position, facing).unwrap_or_else(|error| {
                    debug!(%error, "ignoring placement");
                    state
                })
            }
            Command::Move => self.advance(state),
            Command::Left => state.rotated(false),
            Command::Right => state.rotated(true),
            Command::Report => {
                sink.report(state.report().as_deref());
                state
            }
        }
    }

    /// Builds a fresh placed state, replacing whatever came before.
    pub fn place(&self, position: IVec2, facing: Facing) -> Result<RobotState, CommandError> {
        if !self.config.contains(position) {
            return Err(CommandError::OffGrid {
                x: position.x,
                y: position.y,
            });
        }
        Ok(RobotState::Placed { position, facing })
    }

    /// Moves a placed robot one cell forward unless that would leave the grid.
    pub fn advance(&self, state: RobotState) -> RobotState {
        let RobotState::Placed { position, facing } = state else {
            return state;
        };

        let target = position + facing.step();
        if !self.config.contains(target) {
            debug!(x = position.x, y = position.y, %facing, "move blocked at edge");
            return state;
        }
        RobotState::Placed {
            position: target,
            facing,
        }
    }
}

/// Interprets `input` on the default 5×5 grid, writing reports to [`LogSink`].
pub fn interpret(input: &str) -> RobotState {
    RobotInterpreter::default().interpret(input)
}
