//! # grid-robot
//!
//! A command interpreter for a single robot on a bounded grid (5×5 by default).
//!
//! Input is plain text, one command per line:
//!
//! ```text
//! PLACE 1,2,EAST
//! MOVE
//! LEFT
//! REPORT
//! ```
//!
//! The robot ignores everything until a valid `PLACE`, refuses any `MOVE` that
//! would take it off the grid, and silently skips lines it does not understand.
//!
//! ```rust
//! use grid_robot::RobotInterpreter;
//!
//! let mut reports: Vec<Option<String>> = Vec::new();
//! let state = RobotInterpreter::default()
//!     .interpret_with("PLACE 0,0,NORTH\nMOVE\nREPORT", &mut reports);
//!
//! assert_eq!(reports, vec![Some("0,1,NORTH".to_string())]);
//! assert_eq!(state.report().as_deref(), Some("0,1,NORTH"));
//! ```

pub mod error;
pub mod interpreter;
pub mod report;
pub mod robot;

pub use error::*;
pub use interpreter::*;
pub use report::*;
pub use robot::*;
