//! Error types for parsing and validating simulation input.
//!
//! Line numbers are 1-based and refer to the raw text handed to the parser.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Positional fields of the settings text, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsField {
    InitialX,
    InitialY,
    InitialDirection,
    BoardRows,
    BoardCols,
    Mines,
    ExitX,
    ExitY,
}

impl SettingsField {
    /// Fields in the order they appear, one per line.
    pub const ORDER: [SettingsField; 8] = [
        SettingsField::InitialX,
        SettingsField::InitialY,
        SettingsField::InitialDirection,
        SettingsField::BoardRows,
        SettingsField::BoardCols,
        SettingsField::Mines,
        SettingsField::ExitX,
        SettingsField::ExitY,
    ];

    /// 1-based line this field is read from.
    pub fn line(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InitialX => "initial x",
            Self::InitialY => "initial y",
            Self::InitialDirection => "initial direction",
            Self::BoardRows => "board rows",
            Self::BoardCols => "board cols",
            Self::Mines => "mines",
            Self::ExitX => "exit x",
            Self::ExitY => "exit y",
        })
    }
}

/// Malformed settings or actions text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Two separators in a row, or a leading separator, on an action line.
    #[error("line {line}: empty action token")]
    EmptyAction { line: usize },

    /// A token other than `Rotate` or `Move`.
    #[error("line {line}: unknown action `{token}`, expected `Rotate` or `Move`")]
    UnknownAction { line: usize, token: String },

    /// The settings text ended before all eight fields were read.
    #[error("settings have {found} lines, expected 8")]
    MissingLines { found: usize },

    /// Non-blank content after the eighth settings line.
    #[error("line {line}: unexpected content after the exit y line")]
    UnexpectedLine { line: usize },

    #[error("line {line} ({field}): `{token}` is not an integer")]
    InvalidInteger {
        line: usize,
        field: SettingsField,
        token: String,
    },

    #[error("line {line}: unknown direction `{token}`, expected North, East, South or West")]
    UnknownDirection { line: usize, token: String },

    /// A mine token that is not two comma-separated integers.
    #[error("line {line}: malformed mine `{token}`, expected `x,y`")]
    MalformedMine { line: usize, token: String },
}

/// Settings that parse but describe an impossible board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: SettingsField, value: i32 },

    #[error("{what} ({x}, {y}) lies outside the board")]
    OutOfBounds { what: &'static str, x: i32, y: i32 },
}

/// Any failure that stops a run before the first action executes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}
