//! The action state machine.
//!
//! A turtle moves `Active -> Active | Dead | Exited`. `Dead` and `Exited` are
//! terminal: [`execute`] leaves a terminal turtle untouched and reports its
//! status again, so callers may keep feeding actions without checking first.

use crate::action::Action;
use crate::board::Board;
use crate::turtle::{StepResult, Turtle};

/// Applies one action to `turtle` on `board` and returns the resulting state.
///
/// - `Rotate` turns the turtle clockwise and never ends the run.
/// - `Move` into a square outside the board is ignored (boundary clamp).
/// - `Move` onto a mine kills the turtle. Mines are checked before the exit,
///   so a square that is both counts as a mine.
/// - `Move` onto the exit marks the turtle as exited.
pub fn execute(action: Action, turtle: &mut Turtle, board: &Board) -> StepResult {
    let status = turtle.status();
    if status.is_terminal() {
        log::debug!("ignoring {action} on terminal turtle ({status:?})");
        return status;
    }

    match action {
        Action::Rotate => turtle.rotate(),
        Action::Move => {
            let Some(target) = turtle
                .forward_position()
                .filter(|t| board.is_within_bounds(*t))
            else {
                log::debug!(
                    "move {} from ({}, {}) blocked by board edge",
                    turtle.direction,
                    turtle.position.x,
                    turtle.position.y
                );
                return StepResult::Active;
            };

            turtle.move_to(target);
            if board.is_mine(target) {
                turtle.kill();
            } else if board.is_exit(target) {
                turtle.exit();
            }
        }
    }

    log::trace!(
        "{action} -> ({}, {}) facing {}",
        turtle.position.x,
        turtle.position.y,
        turtle.direction
    );
    turtle.status()
}

/// A board paired with the turtle walking on it.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turtle: Turtle,
}

impl Game {
    /// Places `turtle` on `board`.
    pub fn new(board: Board, turtle: Turtle) -> Self {
        Self { board, turtle }
    }

    /// Applies one action; see [`execute`].
    pub fn execute(&mut self, action: Action) -> StepResult {
        execute(action, &mut self.turtle, &self.board)
    }

    /// Runs `actions` in order, stopping at the first terminal result.
    ///
    /// Returns the final status and how many actions actually ran.
    pub fn execute_all<'a>(
        &mut self,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> (StepResult, usize) {
        let mut executed = 0;
        let mut status = self.turtle.status();
        for &action in actions {
            if status.is_terminal() {
                break;
            }
            status = self.execute(action);
            executed += 1;
        }
        (status, executed)
    }

    /// The board being walked.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The turtle in its current state.
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Shorthand for `self.turtle().status()`.
    pub fn status(&self) -> StepResult {
        self.turtle.status()
    }

    /// Replaces the turtle, keeping the board.
    pub fn reset(&mut self, turtle: Turtle) {
        self.turtle = turtle;
    }

    /// Consumes the game, keeping only the turtle.
    pub fn into_turtle(self) -> Turtle {
        self.turtle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use glam::IVec2;
    use proptest::prelude::*;

    const COLS: i32 = 4;
    const ROWS: i32 = 4;

    fn board() -> Board {
        Board::new(COLS, ROWS, [IVec2::new(COLS - 1, ROWS - 1)], IVec2::new(COLS, ROWS))
    }

    #[test]
    fn rotate_turns_clockwise() {
        let b = board();
        for (from, to) in [
            (Direction::North, Direction::East),
            (Direction::East, Direction::South),
            (Direction::South, Direction::West),
            (Direction::West, Direction::North),
        ] {
            let mut t = Turtle::at(2, 2, from);
            assert_eq!(execute(Action::Rotate, &mut t, &b), StepResult::Active);
            assert_eq!(t.direction, to);
        }
    }

    #[test]
    fn moves_one_square() {
        let b = board();
        for (dir, end) in [
            (Direction::North, (2, 1)),
            (Direction::East, (3, 2)),
            (Direction::South, (2, 3)),
            (Direction::West, (1, 2)),
        ] {
            let mut t = Turtle::at(2, 2, dir);
            execute(Action::Move, &mut t, &b);
            assert_eq!(t.position, IVec2::new(end.0, end.1), "moving {dir}");
        }
    }

    #[test]
    fn moves_off_the_edge_are_ignored() {
        let b = board();
        for (dir, start) in [
            (Direction::North, (0, 0)),
            (Direction::East, (COLS, 0)),
            (Direction::South, (0, ROWS)),
            (Direction::West, (0, 0)),
        ] {
            let mut t = Turtle::at(start.0, start.1, dir);
            let before = t.clone();
            assert_eq!(execute(Action::Move, &mut t, &b), StepResult::Active);
            assert_eq!(t, before, "moving {dir} from {start:?}");
        }
    }

    #[test]
    fn moves_past_i32_max_edge_are_ignored() {
        let b = Board::new(i32::MAX, i32::MAX, [], IVec2::ZERO);
        for (dir, start) in [
            (Direction::East, IVec2::new(i32::MAX, 0)),
            (Direction::South, IVec2::new(0, i32::MAX)),
        ] {
            let mut game = Game::new(b.clone(), Turtle::new(start, dir));
            assert_eq!(game.execute(Action::Move), StepResult::Active);
            assert_eq!(game.board().cols, i32::MAX);
            assert_eq!(game.into_turtle(), Turtle::new(start, dir), "moving {dir}");
        }
    }

    #[test]
    fn stepping_on_a_mine_kills() {
        let b = Board::new(4, 4, [IVec2::new(3, 3)], IVec2::new(4, 4));
        let mut t = Turtle::at(3, 2, Direction::South);
        assert_eq!(execute(Action::Move, &mut t, &b), StepResult::Dead);
        assert!(!t.alive);
        assert_eq!(t.position, IVec2::new(3, 3));
    }

    #[test]
    fn stepping_on_the_exit_exits() {
        let b = Board::new(4, 4, [IVec2::new(3, 3)], IVec2::new(2, 2));
        let mut t = Turtle::at(2, 1, Direction::South);
        assert_eq!(execute(Action::Move, &mut t, &b), StepResult::Exited);
        assert!(t.exited);
        assert!(t.alive);
    }

    #[test]
    fn plain_square_stays_active() {
        let mut game = Game::new(board(), Turtle::at(0, 0, Direction::South));
        assert_eq!(game.execute(Action::Move), StepResult::Active);
        assert!(game.turtle().alive);
        assert!(!game.turtle().exited);
        assert_eq!(game.turtle().position, IVec2::new(0, 1));
    }

    #[test]
    fn mine_wins_over_exit_on_the_same_square() {
        let b = Board::new(2, 2, [IVec2::new(1, 1)], IVec2::new(1, 1));
        let mut t = Turtle::at(1, 0, Direction::South);
        assert_eq!(execute(Action::Move, &mut t, &b), StepResult::Dead);
        assert!(!t.exited);
    }

    #[test]
    fn terminal_turtle_ignores_actions() {
        let b = board();
        let mut dead = Turtle::at(1, 1, Direction::North);
        dead.kill();
        let snapshot = dead.clone();
        assert_eq!(execute(Action::Move, &mut dead, &b), StepResult::Dead);
        assert_eq!(execute(Action::Rotate, &mut dead, &b), StepResult::Dead);
        assert_eq!(dead, snapshot);

        let mut out = Turtle::at(1, 1, Direction::North);
        out.exit();
        assert_eq!(execute(Action::Move, &mut out, &b), StepResult::Exited);
        assert_eq!(out.position, IVec2::ONE);
    }

    #[test]
    fn execute_all_stops_at_terminal_state() {
        let b = Board::new(4, 4, [IVec2::new(0, 2)], IVec2::new(4, 4));
        let mut game = Game::new(b, Turtle::at(0, 0, Direction::South));
        let actions = [Action::Move, Action::Move, Action::Move, Action::Rotate];
        assert_eq!(game.execute_all(&actions), (StepResult::Dead, 2));
        assert_eq!(game.turtle().position, IVec2::new(0, 2));
        assert_eq!(game.turtle().direction, Direction::South);
    }

    fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![Just(Action::Rotate), Just(Action::Move)]
    }

    proptest! {
        #[test]
        fn turtle_never_leaves_the_board(
            x in 0..=COLS,
            y in 0..=ROWS,
            actions in prop::collection::vec(any_action(), 0..64),
        ) {
            let b = Board::new(COLS, ROWS, [], IVec2::new(-10, -10));
            let mut t = Turtle::at(x, y, Direction::North);
            for a in actions {
                execute(a, &mut t, &b);
                prop_assert!(b.is_within_bounds(t.position));
            }
        }

        #[test]
        fn terminal_turtle_is_frozen(
            dead in any::<bool>(),
            actions in prop::collection::vec(any_action(), 1..32),
        ) {
            let b = board();
            let mut t = Turtle::at(2, 2, Direction::East);
            if dead { t.kill() } else { t.exit() }
            let snapshot = t.clone();
            for a in actions {
                prop_assert!(execute(a, &mut t, &b).is_terminal());
            }
            prop_assert_eq!(t, snapshot);
        }
    }
}
