//! # mine-turtle
//!
//! A small simulation engine for a turtle crossing a minefield.
//!
//! Settings text describes the board (size, mines, exit) and the turtle's
//! starting pose; actions text holds one sequence of `Rotate`/`Move` commands
//! per line. The [`SequenceRunner`] plays each sequence through the
//! [`engine`] and classifies it as `Still in danger!`, `Mine hit!` or
//! `Success!`.
//!
//! ```
//! let report = mine_turtle::simulate(
//!     "0\n0\nEast\n5\n4\n1,1 4,3\n2\n2",
//!     "Move Move Rotate Move Move",
//! )
//! .unwrap();
//! assert_eq!(report.to_string(), "Sequence 1: Success!");
//! ```

pub mod action;
pub mod board;
pub mod direction;
pub mod engine;
pub mod error;
pub mod interpreter;
pub mod settings;
pub mod turtle;

pub use action::*;
pub use board::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use interpreter::*;
pub use settings::*;
pub use turtle::*;
