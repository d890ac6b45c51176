//! Command-line front end: reads a settings file and an actions file and
//! prints one outcome line per sequence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mine_turtle::{ActionSet, RunnerConfig, SequenceMode, SequenceRunner, Settings};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Mode {
    /// Every sequence starts from the initial pose.
    #[default]
    Independent,
    /// The turtle keeps its state between sequences.
    Continuous,
}

impl From<Mode> for SequenceMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Independent => SequenceMode::Independent,
            Mode::Continuous => SequenceMode::Continuous,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Walk a turtle through a minefield")]
struct Args {
    /// Eight-line settings file (start pose, board size, mines, exit).
    settings: PathBuf,

    /// Actions file, one sequence of `Rotate`/`Move` per line.
    actions: PathBuf,

    /// How state carries between sequences.
    #[arg(long, value_enum, default_value_t = Mode::Independent)]
    mode: Mode,

    /// Print the full report as JSON instead of outcome lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings_text = fs::read_to_string(&args.settings)
        .with_context(|| format!("reading settings from {}", args.settings.display()))?;
    let actions_text = fs::read_to_string(&args.actions)
        .with_context(|| format!("reading actions from {}", args.actions.display()))?;

    let settings = Settings::parse(&settings_text)
        .with_context(|| format!("parsing {}", args.settings.display()))?;
    let actions = ActionSet::parse(&actions_text)
        .with_context(|| format!("parsing {}", args.actions.display()))?;
    log::info!(
        "loaded {} sequences ({} actions) on a {}x{} board with {} mines",
        actions.len(),
        actions.action_count(),
        i64::from(settings.board_cols) + 1,
        i64::from(settings.board_rows) + 1,
        settings.mines.len()
    );

    let runner = SequenceRunner::new(RunnerConfig {
        mode: args.mode.into(),
    });
    let report = runner.run(&settings, &actions)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
