//! The sliding-tile puzzle as a search problem.
//!
//! - [`puzzle`]: board states, legal moves, shuffling and the stored layouts
//! - [`problem`]: the puzzle wrapped as a [`search::SearchProblem`]
//! - [`heuristics`]: distance estimates for A*
//! - [`agent`]: the nine numbered solving strategies
//! - [`search`]: breadth-first, uniform-cost and A* graph search
//!
//! ```
//! use eight_puzzle::{Agent, EightPuzzleProblem, PuzzleState};
//!
//! let puzzle = PuzzleState::fixture(0).unwrap();
//! let path = Agent::Manhattan.solve(&EightPuzzleProblem::new(puzzle.clone())).unwrap();
//! assert!(puzzle.apply_all(&path).unwrap().is_goal());
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod frames;
pub mod heuristics;
pub mod problem;
pub mod puzzle;
pub mod replay;
pub mod search;

pub use agent::{Agent, Strategy};
pub use config::RunConfig;
pub use error::{ConfigError, PuzzleError};
pub use frames::FrameWriter;
pub use heuristics::Heuristic;
pub use problem::EightPuzzleProblem;
pub use puzzle::{Move, PuzzleState};
pub use replay::{Replay, ReplayError};
pub use search::{NoSolution, SearchProblem};
