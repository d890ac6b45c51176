//! Run settings and the parser for the fixed eight-line settings text.
//!
//! ```text
//! 0            initial x
//! 0            initial y
//! South        initial direction
//! 5            board rows
//! 4            board cols
//! 1,1 4,3      mines (may be blank)
//! 2            exit x
//! 2            exit y
//! ```

use crate::board::Board;
use crate::direction::Direction;
use crate::error::{ParseError, SettingsError, SettingsField};
use crate::turtle::Turtle;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Parsed, immutable input for one run.
///
/// `mines` is a set, so two settings that list the same mines in a different
/// order (or with duplicates) compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub initial_x: i32,
    pub initial_y: i32,
    pub initial_direction: Direction,
    pub board_rows: i32,
    pub board_cols: i32,
    pub mines: HashSet<IVec2>,
    pub exit_x: i32,
    pub exit_y: i32,
}

impl Settings {
    /// Parses settings text.
    ///
    /// Accepts `\n` and `\r\n` line endings and ignores whitespace around each
    /// field. Blank lines after the eighth are allowed; anything else there is
    /// rejected.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        if lines.len() < SettingsField::ORDER.len() {
            return Err(ParseError::MissingLines { found: lines.len() });
        }
        if let Some(extra) = lines[SettingsField::ORDER.len()..]
            .iter()
            .position(|l| !l.is_empty())
        {
            return Err(ParseError::UnexpectedLine {
                line: SettingsField::ORDER.len() + extra + 1,
            });
        }

        let field = |f: SettingsField| lines[f.line() - 1];
        let int = |f: SettingsField| parse_int(field(f), f);

        let direction_token = field(SettingsField::InitialDirection);
        let initial_direction =
            Direction::from_name(direction_token).ok_or_else(|| ParseError::UnknownDirection {
                line: SettingsField::InitialDirection.line(),
                token: direction_token.to_string(),
            })?;

        Ok(Self {
            initial_x: int(SettingsField::InitialX)?,
            initial_y: int(SettingsField::InitialY)?,
            initial_direction,
            board_rows: int(SettingsField::BoardRows)?,
            board_cols: int(SettingsField::BoardCols)?,
            mines: parse_mines(field(SettingsField::Mines))?,
            exit_x: int(SettingsField::ExitX)?,
            exit_y: int(SettingsField::ExitY)?,
        })
    }

    pub fn initial_position(&self) -> IVec2 {
        IVec2::new(self.initial_x, self.initial_y)
    }

    pub fn exit(&self) -> IVec2 {
        IVec2::new(self.exit_x, self.exit_y)
    }

    /// A fresh turtle at the starting pose.
    pub fn turtle(&self) -> Turtle {
        Turtle::new(self.initial_position(), self.initial_direction)
    }

    /// Checks that the board has positive dimensions and that the start, every
    /// mine and the exit lie on it.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            (SettingsField::BoardRows, self.board_rows),
            (SettingsField::BoardCols, self.board_cols),
        ] {
            if value <= 0 {
                return Err(SettingsError::NonPositiveDimension { field, value });
            }
        }

        let bounds = Board::new(self.board_cols, self.board_rows, [], IVec2::ZERO);
        let check = |what: &'static str, pos: IVec2| {
            if bounds.is_within_bounds(pos) {
                Ok(())
            } else {
                Err(SettingsError::OutOfBounds {
                    what,
                    x: pos.x,
                    y: pos.y,
                })
            }
        };

        check("start", self.initial_position())?;
        check("exit", self.exit())?;
        self.mines.iter().try_for_each(|m| check("mine", *m))
    }

    /// Validates and builds the board for this run.
    pub fn board(&self) -> Result<Board, SettingsError> {
        self.validate()?;
        let board = Board::new(
            self.board_cols,
            self.board_rows,
            self.mines.iter().copied(),
            self.exit(),
        );
        let start = self.initial_position();
        if board.is_mine(start) || board.is_exit(start) {
            log::warn!(
                "turtle starts on a mine or the exit at ({}, {}); only squares entered by a move are scored",
                start.x,
                start.y
            );
        }
        Ok(board)
    }
}

impl FromStr for Settings {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_int(token: &str, field: SettingsField) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        line: field.line(),
        field,
        token: token.to_string(),
    })
}

fn parse_mines(line: &str) -> Result<HashSet<IVec2>, ParseError> {
    line.split(' ')
        .filter(|t| !t.is_empty())
        .map(|token| -> Result<IVec2, ParseError> {
            let malformed = || ParseError::MalformedMine {
                line: SettingsField::Mines.line(),
                token: token.to_string(),
            };
            let (x, y) = token.split_once(',').ok_or_else(malformed)?;
            let x = x.parse().map_err(|_| malformed())?;
            let y = y.parse().map_err(|_| malformed())?;
            Ok(IVec2::new(x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0\n0\nSouth\n5\n4\n1,1 4,3\n2\n2";

    #[test]
    fn parses_every_field() {
        let s = Settings::parse(SAMPLE).unwrap();
        assert_eq!(s.initial_x, 0);
        assert_eq!(s.initial_y, 0);
        assert_eq!(s.initial_direction, Direction::South);
        assert_eq!(s.board_rows, 5);
        assert_eq!(s.board_cols, 4);
        assert_eq!(s.mines, HashSet::from([IVec2::new(4, 3), IVec2::new(1, 1)]));
        assert_eq!(s.exit_x, 2);
        assert_eq!(s.exit_y, 2);
    }

    #[test]
    fn mine_order_and_duplicates_do_not_matter() {
        let a = Settings::parse(SAMPLE).unwrap();
        let b = Settings::parse("0\r\n0\r\nSouth\r\n5\r\n4\r\n4,3 1,1 4,3\r\n2\r\n2\r\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn blank_mine_line_means_no_mines() {
        let s = Settings::parse("1\n1\nEast\n3\n3\n\n0\n0").unwrap();
        assert!(s.mines.is_empty());
    }

    #[test]
    fn too_few_lines() {
        assert_eq!(
            Settings::parse("0\n0\nSouth\n5"),
            Err(ParseError::MissingLines { found: 4 })
        );
    }

    #[test]
    fn trailing_content_is_rejected() {
        assert_eq!(
            Settings::parse(&format!("{SAMPLE}\n\n7")),
            Err(ParseError::UnexpectedLine { line: 10 })
        );
        assert!(Settings::parse(&format!("{SAMPLE}\n\n")).is_ok());
    }

    #[test]
    fn bad_integer_names_field() {
        let err = Settings::parse("0\n0\nSouth\nfive\n4\n\n2\n2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInteger {
                line: 4,
                field: SettingsField::BoardRows,
                token: "five".into()
            }
        );
    }

    #[test]
    fn bad_direction() {
        let err = Settings::parse("0\n0\nsouth\n5\n4\n\n2\n2").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownDirection {
                line: 3,
                token: "south".into()
            }
        );
    }

    #[test]
    fn bad_mine_tokens() {
        for token in ["1", "1,", "a,2", "1;2", "1,2,3"] {
            let text = format!("0\n0\nSouth\n5\n4\n{token}\n2\n2");
            assert_eq!(
                Settings::parse(&text),
                Err(ParseError::MalformedMine {
                    line: 6,
                    token: token.into()
                }),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn validation_rejects_off_board_items() {
        let mut s = Settings::parse(SAMPLE).unwrap();
        assert!(s.validate().is_ok());

        s.mines.insert(IVec2::new(5, 0));
        assert_eq!(
            s.validate(),
            Err(SettingsError::OutOfBounds {
                what: "mine",
                x: 5,
                y: 0
            })
        );

        let mut s = Settings::parse(SAMPLE).unwrap();
        s.initial_y = -1;
        assert!(matches!(
            s.board(),
            Err(SettingsError::OutOfBounds { what: "start", .. })
        ));

        let mut s = Settings::parse(SAMPLE).unwrap();
        s.board_cols = 0;
        assert_eq!(
            s.validate(),
            Err(SettingsError::NonPositiveDimension {
                field: SettingsField::BoardCols,
                value: 0
            })
        );
    }

    #[test]
    fn builds_board_and_turtle() {
        let s = Settings::parse(SAMPLE).unwrap();
        let board = s.board().unwrap();
        assert_eq!((board.cols, board.rows), (4, 5));
        assert!(board.is_exit(IVec2::new(2, 2)));
        assert_eq!(s.turtle(), Turtle::at(0, 0, Direction::South));
    }
}
