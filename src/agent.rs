use std::fmt;

use log::info;

use crate::error::PuzzleError;
use crate::heuristics::Heuristic;
use crate::problem::EightPuzzleProblem;
use crate::puzzle::Move;
use crate::search::{a_star_search, breadth_first_search, uniform_cost_search, NoSolution};

/// Which search engine an agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    UniformCost,
    AStar(Heuristic),
}

/// The nine solving agents, numbered as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agent {
    EuclideanManhattan,
    Euclidean,
    Manhattan,
    Displaced,
    DisplacedManhattan,
    BreadthFirst,
    UniformCost,
    NullHeuristic,
    ThinkingAhead,
}

impl Agent {
    pub const ALL: [Agent; 9] = [
        Agent::EuclideanManhattan,
        Agent::Euclidean,
        Agent::Manhattan,
        Agent::Displaced,
        Agent::DisplacedManhattan,
        Agent::BreadthFirst,
        Agent::UniformCost,
        Agent::NullHeuristic,
        Agent::ThinkingAhead,
    ];

    pub fn index(self) -> usize {
        match self {
            Agent::EuclideanManhattan => 0,
            Agent::Euclidean => 1,
            Agent::Manhattan => 2,
            Agent::Displaced => 3,
            Agent::DisplacedManhattan => 4,
            Agent::BreadthFirst => 5,
            Agent::UniformCost => 6,
            Agent::NullHeuristic => 7,
            Agent::ThinkingAhead => 8,
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Agent::EuclideanManhattan => Strategy::AStar(Heuristic::EuclideanManhattan),
            Agent::Euclidean => Strategy::AStar(Heuristic::Euclidean),
            Agent::Manhattan => Strategy::AStar(Heuristic::Manhattan),
            Agent::Displaced => Strategy::AStar(Heuristic::Displaced),
            Agent::DisplacedManhattan => Strategy::AStar(Heuristic::DisplacedManhattan),
            Agent::BreadthFirst => Strategy::BreadthFirst,
            Agent::UniformCost => Strategy::UniformCost,
            Agent::NullHeuristic => Strategy::AStar(Heuristic::Null),
            Agent::ThinkingAhead => Strategy::AStar(Heuristic::ThinkingAhead),
        }
    }

    /// Whether the agent is guaranteed to return a shortest path.
    pub fn is_optimal(self) -> bool {
        match self.strategy() {
            Strategy::BreadthFirst | Strategy::UniformCost => true,
            Strategy::AStar(heuristic) => heuristic.is_admissible(),
        }
    }

    /// Runs the agent's search and returns the moves from start to goal.
    pub fn solve(self, problem: &EightPuzzleProblem) -> Result<Vec<Move>, NoSolution> {
        let path = match self.strategy() {
            Strategy::BreadthFirst => breadth_first_search(problem)?,
            Strategy::UniformCost => uniform_cost_search(problem)?,
            Strategy::AStar(heuristic) => a_star_search(problem, heuristic.function())?,
        };
        info!("agent {} found a path of {} moves", self, path.len());
        Ok(path)
    }
}

impl TryFrom<usize> for Agent {
    type Error = PuzzleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Agent::ALL
            .get(index)
            .copied()
            .ok_or(PuzzleError::InvalidAgentIndex(index))
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy() {
            Strategy::BreadthFirst => write!(f, "{} (breadth-first search)", self.index()),
            Strategy::UniformCost => write!(f, "{} (uniform-cost search)", self.index()),
            Strategy::AStar(heuristic) => {
                write!(f, "{} (A* with {} heuristic)", self.index(), heuristic)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleState;

    #[test]
    fn index_mapping() {
        for (i, agent) in Agent::ALL.iter().enumerate() {
            assert_eq!(agent.index(), i);
            assert_eq!(Agent::try_from(i), Ok(*agent));
        }
        assert_eq!(Agent::try_from(9), Err(PuzzleError::InvalidAgentIndex(9)));
        assert_eq!(
            Agent::try_from(0).unwrap().strategy(),
            Strategy::AStar(Heuristic::EuclideanManhattan)
        );
        assert_eq!(Agent::try_from(5).unwrap().strategy(), Strategy::BreadthFirst);
        assert_eq!(
            Agent::try_from(7).unwrap().strategy(),
            Strategy::AStar(Heuristic::Null)
        );
    }

    #[test]
    fn every_agent_solves_one_move_fixture() {
        let problem = EightPuzzleProblem::new(PuzzleState::fixture(0).unwrap());
        for agent in Agent::ALL {
            assert_eq!(agent.solve(&problem), Ok(vec![Move::Left]), "agent {}", agent);
        }
    }

    #[test]
    fn solved_start_gives_empty_path() {
        let problem = EightPuzzleProblem::new(PuzzleState::goal(3).unwrap());
        for agent in Agent::ALL {
            assert!(agent.solve(&problem).unwrap().is_empty());
        }
    }

    #[test]
    fn unsolvable_start_propagates_no_solution() {
        // 12 reachable layouts on a 2x2 board; this one is in the other half.
        let problem = EightPuzzleProblem::new(PuzzleState::new(&[1, 0, 3, 2], 2).unwrap());
        assert_eq!(
            Agent::BreadthFirst.solve(&problem),
            Err(NoSolution { expanded: 12 })
        );
        assert_eq!(
            Agent::Manhattan.solve(&problem),
            Err(NoSolution { expanded: 12 })
        );
    }

    #[test]
    fn display_names_engine_and_heuristic() {
        assert_eq!(Agent::Manhattan.to_string(), "2 (A* with manhattan heuristic)");
        assert_eq!(Agent::UniformCost.to_string(), "6 (uniform-cost search)");
    }
}
