use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

use eight_puzzle::{EightPuzzleProblem, FrameWriter, Replay, RunConfig};

/// Solve a shuffled or stored sliding-tile puzzle and replay the solution.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The side length of the puzzle (SIZE ** 2 cells)
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Select the agent (0-8)
    #[arg(short, long, default_value_t = 0)]
    agent: usize,

    /// Load one of the 6 stored 3x3 puzzles (0-5) instead of generating one
    #[arg(long)]
    load: Option<usize>,

    /// Shuffle the solved puzzle with MOVES random legal moves
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    moves: i64,

    /// Seed for the shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Save each puzzle state as a text frame in this directory
    #[arg(long, value_name = "DIR")]
    frames: Option<PathBuf>,

    /// Wait for return between states
    #[arg(long)]
    step: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let config = RunConfig {
        size: cli.size,
        moves: cli.moves,
        load: cli.load,
        agent: cli.agent,
    };
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzle = config.build_puzzle(&mut rng)?;
    if !puzzle.is_solvable() {
        bail!("the puzzle cannot reach the goal:\n{}", puzzle);
    }

    let agent = config.agent()?;
    info!("solving with agent {}", agent);
    let problem = EightPuzzleProblem::new(puzzle.clone());
    let path = agent.solve(&problem)?;

    let mut frames = cli
        .frames
        .map(FrameWriter::new)
        .transpose()
        .context("failed to create the frames directory")?;

    {
        let mut replay = Replay::new(io::stdout().lock());
        if let Some(frames) = frames.as_mut() {
            replay = replay.with_frames(frames);
        }
        if cli.step && io::stdin().is_terminal() {
            replay = replay.with_pause(io::stdin().lock());
        }
        replay.play(&puzzle, &path)?;
    }

    if let Some(frames) = frames {
        info!("saved {} frames to {}", frames.count(), frames.dir().display());
    }
    Ok(())
}
