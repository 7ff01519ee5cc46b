use crate::puzzle::{Move, PuzzleState};
use crate::search::SearchProblem;

/// Presents a start [`PuzzleState`] to the search engines.
///
/// Every move costs 1; the goal is the solved board regardless of the start.
#[derive(Debug, Clone)]
pub struct EightPuzzleProblem {
    puzzle: PuzzleState,
    size: usize,
}

impl EightPuzzleProblem {
    pub fn new(puzzle: PuzzleState) -> Self {
        let size = puzzle.size();
        Self { puzzle, size }
    }

    /// Side length of the board, used by the heuristics.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }
}

impl SearchProblem for EightPuzzleProblem {
    type State = PuzzleState;
    type Action = Move;

    fn start_state(&self) -> PuzzleState {
        self.puzzle.clone()
    }

    fn is_goal_state(&self, state: &PuzzleState) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &PuzzleState) -> Vec<(PuzzleState, Move, u32)> {
        state
            .legal_moves()
            .into_iter()
            .filter_map(|mv| state.try_move(mv).map(|next| (next, mv, 1)))
            .collect()
    }

    /// Feasibility of the sequence is not checked.
    fn cost_of_actions(&self, actions: &[Move]) -> u32 {
        actions.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_follow_legal_move_order() {
        let start = PuzzleState::new(&[1, 0, 2, 3, 4, 5, 6, 7, 8], 3).unwrap();
        let problem = EightPuzzleProblem::new(start.clone());
        let succ = problem.successors(&start);

        let moves: Vec<Move> = succ.iter().map(|(_, mv, _)| *mv).collect();
        assert_eq!(moves, start.legal_moves());
        assert!(succ.iter().all(|(_, _, cost)| *cost == 1));
        for (next, mv, _) in &succ {
            assert_eq!(next, &start.result(*mv).unwrap());
        }
    }

    #[test]
    fn goal_test_delegates_to_state() {
        let problem = EightPuzzleProblem::new(PuzzleState::fixture(0).unwrap());
        assert!(!problem.is_goal_state(&problem.start_state()));
        assert!(problem.is_goal_state(&PuzzleState::goal(3).unwrap()));
        assert_eq!(problem.size(), 3);
    }

    #[test]
    fn cost_is_number_of_actions() {
        let problem = EightPuzzleProblem::new(PuzzleState::goal(3).unwrap());
        assert_eq!(problem.cost_of_actions(&[]), 0);
        assert_eq!(
            problem.cost_of_actions(&[Move::Down, Move::Right, Move::Up]),
            3
        );
    }
}
