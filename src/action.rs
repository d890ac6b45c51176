//! Turtle actions and the parser for multi-line command text.
//!
//! Each non-blank line is one [`ActionSequence`]; tokens on a line are separated
//! by single spaces and must be exactly `Rotate` or `Move`.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single turtle command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turn 90 degrees clockwise.
    Rotate,
    /// Step one square forward.
    Move,
}

impl Action {
    /// The literal used in actions text.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rotate => "Rotate",
            Self::Move => "Move",
        }
    }

    /// Case-sensitive lookup of a command literal.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Rotate" => Some(Self::Rotate),
            "Move" => Some(Self::Move),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of commands, executed in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSequence {
    pub actions: Vec<Action>,
}

impl ActionSequence {
    /// Wraps an ordered list of actions.
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Number of actions on the line.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// `true` when the sequence holds no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates the actions in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// Parses one line. `line_no` is only used for error reporting.
    fn parse_line(line: &str, line_no: usize) -> Result<Self, ParseError> {
        line.split(' ')
            .map(|token| match token {
                "" => Err(ParseError::EmptyAction { line: line_no }),
                _ => Action::from_name(token).ok_or_else(|| ParseError::UnknownAction {
                    line: line_no,
                    token: token.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl<'a> IntoIterator for &'a ActionSequence {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Every sequence from a command text, in source line order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub sequences: Vec<ActionSequence>,
}

impl ActionSet {
    /// Wraps an ordered list of sequences.
    pub fn new(sequences: Vec<ActionSequence>) -> Self {
        Self { sequences }
    }

    /// Parses command text.
    ///
    /// Accepts both `\n` and `\r\n` line endings. Blank lines are skipped and
    /// surrounding whitespace on a line is ignored. The first bad token aborts
    /// the parse; no partial set is returned.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        text.lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let line = line.trim();
                (!line.is_empty()).then(|| ActionSequence::parse_line(line, i + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// `true` when no sequences were parsed.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Total number of actions across all sequences.
    pub fn action_count(&self) -> usize {
        self.sequences.iter().map(ActionSequence::len).sum()
    }
}

impl FromStr for ActionSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
