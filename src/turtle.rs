//! Turtle state and the primitive operations the engine applies to it.

use crate::direction::Direction;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// What a turtle is doing after an action has been applied.
///
/// `Dead` and `Exited` are terminal: once reached, no action changes the
/// turtle again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepResult {
    /// Still on the board, neither on a mine nor on the exit.
    Active,
    /// Stepped onto a mine.
    Dead,
    /// Stepped onto the exit.
    Exited,
}

impl StepResult {
    /// `true` for `Dead` and `Exited`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// The state of the walking turtle.
///
/// The turtle knows nothing about the board: bounds, mines and the exit are
/// checked by [`crate::engine::execute`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turtle {
    /// Current grid square.
    pub position: IVec2,

    /// Current heading.
    pub direction: Direction,

    /// Cleared when the turtle steps on a mine.
    pub alive: bool,

    /// Set when the turtle reaches the exit.
    pub exited: bool,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new(IVec2::ZERO, Direction::North)
    }
}

impl Turtle {
    /// A live, not-yet-exited turtle at `position` facing `direction`.
    pub fn new(position: IVec2, direction: Direction) -> Self {
        Self {
            position,
            direction,
            alive: true,
            exited: false,
        }
    }

    /// Shorthand for [`Turtle::new`] from raw coordinates.
    pub fn at(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(IVec2::new(x, y), direction)
    }

    /// The square one step ahead, or `None` if it is not representable.
    /// Does not move the turtle.
    pub fn forward_position(&self) -> Option<IVec2> {
        let step = self.direction.offset();
        Some(IVec2::new(
            self.position.x.checked_add(step.x)?,
            self.position.y.checked_add(step.y)?,
        ))
    }

    /// Turns 90 degrees clockwise.
    pub fn rotate(&mut self) {
        self.direction = self.direction.rotate_clockwise();
    }

    /// Places the turtle on `position` without any checks.
    pub fn move_to(&mut self, position: IVec2) {
        self.position = position;
    }

    /// Marks the turtle as dead.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Marks the turtle as having left through the exit.
    pub fn exit(&mut self) {
        self.exited = true;
    }

    /// Current state in the `Active -> {Dead, Exited}` machine.
    pub fn status(&self) -> StepResult {
        if !self.alive {
            StepResult::Dead
        } else if self.exited {
            StepResult::Exited
        } else {
            StepResult::Active
        }
    }

    /// `true` once the turtle is dead or has exited.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
