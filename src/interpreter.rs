//! Runs parsed action sequences against a board and classifies each one.
//!
//! The entry point is [`SequenceRunner`]. Configure it with a [`RunnerConfig`]
//! and call [`SequenceRunner::run`] with parsed [`Settings`] and an
//! [`ActionSet`], or use [`simulate`] to go straight from raw text to a
//! [`Report`].

use crate::action::{ActionSequence, ActionSet};
use crate::board::Board;
use crate::direction::Direction;
use crate::engine::Game;
use crate::error::Error;
use crate::settings::Settings;
use crate::turtle::{StepResult, Turtle};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where each sequence starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceMode {
    /// Every sequence starts from the initial pose in the settings.
    #[default]
    Independent,
    /// The turtle carries its position, heading and status from one sequence
    /// into the next. Once terminal, later sequences execute nothing and report
    /// the same outcome.
    Continuous,
}

/// Configuration for sequence execution.
#[derive(Clone, Debug, Default)]
pub struct RunnerConfig {
    pub mode: SequenceMode,
}

/// Classification of one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The sequence ran out with the turtle still on the board.
    StillInDanger,
    /// The turtle stepped on a mine.
    MineHit,
    /// The turtle reached the exit.
    Success,
}

impl Outcome {
    /// Text printed after `Sequence <n>: `.
    pub fn label(self) -> &'static str {
        match self {
            Self::StillInDanger => "Still in danger!",
            Self::MineHit => "Mine hit!",
            Self::Success => "Success!",
        }
    }
}

impl From<StepResult> for Outcome {
    fn from(status: StepResult) -> Self {
        match status {
            StepResult::Active => Self::StillInDanger,
            StepResult::Dead => Self::MineHit,
            StepResult::Exited => Self::Success,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of running one sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    /// 1-based sequence number.
    pub index: usize,
    pub outcome: Outcome,
    /// Actions that actually ran; fewer than the sequence length when it
    /// stopped early.
    pub executed: usize,
    pub final_position: IVec2,
    pub final_direction: Direction,
}

impl fmt::Display for SequenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence {}: {}", self.index, self.outcome)
    }
}

/// Outcomes of every sequence in a run, in input order.
///
/// `Display` renders one `Sequence <n>: <outcome>` line per sequence, joined
/// by `\n`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub sequences: Vec<SequenceReport>,
}

impl Report {
    /// Outcome of every sequence, in order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.sequences.iter().map(|s| s.outcome).collect()
    }

    /// Number of sequences reported.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// `true` when no sequences ran.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seq) in self.sequences.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{seq}")?;
        }
        Ok(())
    }
}

/// Drives a turtle through every sequence of an [`ActionSet`].
#[derive(Clone, Debug, Default)]
pub struct SequenceRunner {
    config: RunnerConfig,
}

impl SequenceRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Validates `settings` and runs every sequence in `actions`.
    pub fn run(&self, settings: &Settings, actions: &ActionSet) -> Result<Report, Error> {
        let board = settings.board()?;
        Ok(self.run_on(board, settings.turtle(), actions))
    }

    /// Runs every sequence on an already-built board starting from `start`.
    ///
    /// Each sequence stops at the first mine or exit. In
    /// [`SequenceMode::Independent`] every sequence begins from a copy of
    /// `start`; in [`SequenceMode::Continuous`] the turtle left by one sequence
    /// is the turtle the next one begins with.
    pub fn run_on(&self, board: Board, start: Turtle, actions: &ActionSet) -> Report {
        let mut game = Game::new(board, start.clone());
        let sequences = actions
            .sequences
            .iter()
            .enumerate()
            .map(|(i, sequence)| {
                if self.config.mode == SequenceMode::Independent {
                    game.reset(start.clone());
                }
                run_sequence(&mut game, i + 1, sequence)
            })
            .collect();
        Report { sequences }
    }
}

fn run_sequence(game: &mut Game, index: usize, sequence: &ActionSequence) -> SequenceReport {
    let (status, executed) = game.execute_all(sequence);
    let turtle = game.turtle();
    let outcome = Outcome::from(status);
    log::debug!(
        "sequence {index}: {outcome} after {executed}/{} actions at ({}, {})",
        sequence.len(),
        turtle.position.x,
        turtle.position.y
    );
    SequenceReport {
        index,
        outcome,
        executed,
        final_position: turtle.position,
        final_direction: turtle.direction,
    }
}

/// Parses settings and actions text and runs them with the default config.
pub fn simulate(settings: &str, actions: &str) -> Result<Report, Error> {
    simulate_with(RunnerConfig::default(), settings, actions)
}

/// Like [`simulate`], with an explicit [`RunnerConfig`].
pub fn simulate_with(config: RunnerConfig, settings: &str, actions: &str) -> Result<Report, Error> {
    let settings = Settings::parse(settings)?;
    let actions = ActionSet::parse(actions)?;
    SequenceRunner::new(config).run(&settings, &actions)
}
