use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The minefield the turtle walks on.
///
/// Valid coordinates are `x` in `0..=cols` and `y` in `0..=rows`, so a board
/// with `cols = 4` has five usable columns. The board never changes once a run
/// has started.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Largest valid `x` coordinate.
    pub cols: i32,

    /// Largest valid `y` coordinate.
    pub rows: i32,

    /// Squares that kill the turtle on entry.
    pub mines: HashSet<IVec2>,

    /// The single square that ends a run successfully.
    pub exit: IVec2,
}

impl Board {
    /// Builds a board; duplicate mines collapse into one.
    pub fn new(cols: i32, rows: i32, mines: impl IntoIterator<Item = IVec2>, exit: IVec2) -> Self {
        let board = Self {
            cols,
            rows,
            mines: mines.into_iter().collect(),
            exit,
        };
        if board.is_mine(exit) {
            log::warn!(
                "exit ({}, {}) is also a mine; the mine takes precedence",
                exit.x,
                exit.y
            );
        }
        board
    }

    /// `true` iff `pos` lies inside `[0, cols] x [0, rows]`.
    pub fn is_within_bounds(&self, pos: IVec2) -> bool {
        (0..=self.cols).contains(&pos.x) && (0..=self.rows).contains(&pos.y)
    }

    /// `true` iff a mine sits on `pos`.
    pub fn is_mine(&self, pos: IVec2) -> bool {
        self.mines.contains(&pos)
    }

    /// `true` iff `pos` is the exit.
    pub fn is_exit(&self, pos: IVec2) -> bool {
        self.exit == pos
    }
}
