//! Distance estimates from a state to the solved board.
//!
//! Tile `v` belongs at row `v / n`, column `v % n`. The blank is left out of
//! every sum: counting it would score each neighbour of the goal at 2 and make
//! even the plain distances overestimate.
//!
//! | Estimator | Admissible |
//! |---|---|
//! | [`euclidean`] | yes |
//! | [`manhattan`] | yes |
//! | [`displaced`] | yes |
//! | [`displaced_manhattan`] | no |
//! | [`euclidean_manhattan`] | no |
//! | [`thinking_ahead`] | no |

use std::fmt;

use crate::problem::EightPuzzleProblem;
use crate::puzzle::PuzzleState;
use crate::search::{null_heuristic, SearchProblem};

/// Signature shared by every estimator.
pub type HeuristicFn = fn(&PuzzleState, &EightPuzzleProblem) -> f64;

/// `(row, col, goal_row, goal_col)` for every tile except the blank.
fn tile_offsets(
    state: &PuzzleState,
    size: usize,
) -> impl Iterator<Item = (usize, usize, usize, usize)> + '_ {
    state.cells().iter().enumerate().flat_map(move |(row, values)| {
        values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(move |(col, &value)| {
                let value = value as usize;
                (row, col, value / size, value % size)
            })
    })
}

/// Sum of straight-line distances of each tile from its goal cell.
pub fn euclidean(state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
    tile_offsets(state, problem.size())
        .map(|(row, col, goal_row, goal_col)| {
            let dr = row.abs_diff(goal_row) as f64;
            let dc = col.abs_diff(goal_col) as f64;
            (dr * dr + dc * dc).sqrt()
        })
        .sum()
}

/// Sum of grid distances of each tile from its goal cell.
pub fn manhattan(state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
    tile_offsets(state, problem.size())
        .map(|(row, col, goal_row, goal_col)| row.abs_diff(goal_row) + col.abs_diff(goal_col))
        .sum::<usize>() as f64
}

/// Number of tiles not on their goal cell.
pub fn displaced(state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
    tile_offsets(state, problem.size())
        .filter(|&(row, col, goal_row, goal_col)| row != goal_row || col != goal_col)
        .count() as f64
}

pub fn displaced_manhattan(state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
    displaced(state, problem) + manhattan(state, problem)
}

pub fn euclidean_manhattan(state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
    euclidean(state, problem) + manhattan(state, problem)
}

/// Euclidean distance of the state plus the smallest Euclidean distance
/// among its successors.
pub fn thinking_ahead(state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
    let best_next = problem
        .successors(state)
        .iter()
        .map(|(next, _, _)| euclidean(next, problem))
        .fold(f64::INFINITY, f64::min);

    euclidean(state, problem) + best_next
}

/// Selectable estimator, used by the agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Null,
    Euclidean,
    Manhattan,
    Displaced,
    DisplacedManhattan,
    EuclideanManhattan,
    ThinkingAhead,
}

impl Heuristic {
    pub fn function(self) -> HeuristicFn {
        match self {
            Heuristic::Null => null_heuristic,
            Heuristic::Euclidean => euclidean,
            Heuristic::Manhattan => manhattan,
            Heuristic::Displaced => displaced,
            Heuristic::DisplacedManhattan => displaced_manhattan,
            Heuristic::EuclideanManhattan => euclidean_manhattan,
            Heuristic::ThinkingAhead => thinking_ahead,
        }
    }

    pub fn evaluate(self, state: &PuzzleState, problem: &EightPuzzleProblem) -> f64 {
        (self.function())(state, problem)
    }

    /// Never overestimates the remaining number of moves.
    pub fn is_admissible(self) -> bool {
        matches!(
            self,
            Heuristic::Null | Heuristic::Euclidean | Heuristic::Manhattan | Heuristic::Displaced
        )
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heuristic::Null => "null",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Displaced => "displaced",
            Heuristic::DisplacedManhattan => "displaced+manhattan",
            Heuristic::EuclideanManhattan => "euclidean+manhattan",
            Heuristic::ThinkingAhead => "thinking ahead",
        };
        write!(f, "{}", s)
    }
}
