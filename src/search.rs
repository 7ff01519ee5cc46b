//! Generic graph search over anything implementing [`SearchProblem`].
//!
//! Three engines are provided:
//!
//! - **Breadth-first** ([`breadth_first_search`]), fewest actions.
//! - **Uniform-cost** ([`uniform_cost_search`]), cheapest path by step cost.
//! - **A\*** ([`a_star_search`]), uniform-cost ordered by `g + h`.
//!
//! All three keep a closed set of expanded states, apply the goal test when a
//! node is popped from the frontier, and break frontier ties first-in-first-out
//! so the result only depends on the order successors are generated in.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::hash::Hash;

use log::debug;
use thiserror::Error;

/// The capabilities a search engine needs from a problem.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// `(successor, action, step_cost)` triples, in a deterministic order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, u32)>;

    /// Total cost of a sequence of actions taken from the start state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> u32;
}

/// The frontier ran dry without reaching a goal state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no solution found after expanding {expanded} states")]
pub struct NoSolution {
    pub expanded: usize,
}

/// A heuristic that always estimates zero; turns A* into uniform-cost search.
pub fn null_heuristic<S, P>(_state: &S, _problem: &P) -> f64 {
    0.0
}

struct Node<S, A> {
    state: S,
    parent: usize,
    action: Option<A>,
    cost: u32,
}

const ROOT: usize = usize::MAX;

/// Every generated node, linked to its parent for path reconstruction.
struct Tree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A: Clone> Tree<S, A> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, state: S, parent: usize, action: Option<A>, cost: u32) -> usize {
        self.nodes.push(Node {
            state,
            parent,
            action,
            cost,
        });
        self.nodes.len() - 1
    }

    fn path(&self, mut idx: usize) -> Vec<A> {
        let mut actions = Vec::new();
        while idx != ROOT {
            let node = &self.nodes[idx];
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            idx = node.parent;
        }
        actions.reverse();
        actions
    }
}

/// Frontier entry ordered by priority, then by insertion sequence.
struct Entry {
    priority: f64,
    seq: usize,
    idx: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority, oldest first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Expands the shallowest nodes first.
pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
) -> Result<Vec<P::Action>, NoSolution> {
    let mut tree = Tree::new();
    let mut closed: HashSet<P::State> = HashSet::new();
    let mut frontier = VecDeque::new();
    let mut expanded = 0;

    frontier.push_back(tree.push(problem.start_state(), ROOT, None, 0));

    while let Some(idx) = frontier.pop_front() {
        let state = tree.nodes[idx].state.clone();
        if problem.is_goal_state(&state) {
            debug!("breadth-first search expanded {} states", expanded);
            return Ok(tree.path(idx));
        }
        if !closed.insert(state.clone()) {
            continue;
        }
        expanded += 1;

        let cost = tree.nodes[idx].cost;
        for (next, action, step) in problem.successors(&state) {
            if !closed.contains(&next) {
                frontier.push_back(tree.push(next, idx, Some(action), cost + step));
            }
        }
    }

    debug!("breadth-first search exhausted after {} states", expanded);
    Err(NoSolution { expanded })
}

/// Expands the node with the lowest path cost first.
pub fn uniform_cost_search<P: SearchProblem>(
    problem: &P,
) -> Result<Vec<P::Action>, NoSolution> {
    best_first(problem, "uniform-cost", |_, _| 0.0)
}

/// Expands the node with the lowest `cost + heuristic(state, problem)` first.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Result<Vec<P::Action>, NoSolution>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    best_first(problem, "A*", heuristic)
}

fn best_first<P, H>(
    problem: &P,
    name: &str,
    heuristic: H,
) -> Result<Vec<P::Action>, NoSolution>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    let mut tree = Tree::new();
    let mut closed: HashSet<P::State> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;
    let mut expanded = 0;

    let start = problem.start_state();
    let priority = heuristic(&start, problem);
    frontier.push(Entry {
        priority,
        seq,
        idx: tree.push(start, ROOT, None, 0),
    });

    while let Some(Entry { idx, .. }) = frontier.pop() {
        let state = tree.nodes[idx].state.clone();
        if problem.is_goal_state(&state) {
            debug!("{} search expanded {} states", name, expanded);
            return Ok(tree.path(idx));
        }
        if !closed.insert(state.clone()) {
            continue;
        }
        expanded += 1;

        let cost = tree.nodes[idx].cost;
        for (next, action, step) in problem.successors(&state) {
            if closed.contains(&next) {
                continue;
            }
            let g = cost + step;
            let priority = g as f64 + heuristic(&next, problem);
            seq += 1;
            frontier.push(Entry {
                priority,
                seq,
                idx: tree.push(next, idx, Some(action), g),
            });
        }
    }

    debug!("{} search exhausted after {} states", name, expanded);
    Err(NoSolution { expanded })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line of positions `0..len`; stepping right costs 1, jumping two costs 3.
    struct Line {
        len: i32,
        goal: i32,
    }

    impl SearchProblem for Line {
        type State = i32;
        type Action = &'static str;

        fn start_state(&self) -> i32 {
            0
        }

        fn is_goal_state(&self, state: &i32) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &i32) -> Vec<(i32, &'static str, u32)> {
            let mut out = Vec::new();
            if state + 2 < self.len {
                out.push((state + 2, "jump", 3));
            }
            if state + 1 < self.len {
                out.push((state + 1, "step", 1));
            }
            if *state > 0 {
                out.push((state - 1, "back", 1));
            }
            out
        }

        fn cost_of_actions(&self, actions: &[&'static str]) -> u32 {
            actions
                .iter()
                .map(|a| if *a == "jump" { 3 } else { 1 })
                .sum()
        }
    }

    #[test]
    fn bfs_prefers_fewest_actions() {
        let line = Line { len: 5, goal: 4 };
        let path = breadth_first_search(&line).unwrap();
        assert_eq!(path, vec!["jump", "jump"]);
        assert_eq!(line.cost_of_actions(&path), 6);
    }

    #[test]
    fn ucs_prefers_cheapest_path() {
        let line = Line { len: 5, goal: 4 };
        let path = uniform_cost_search(&line).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(line.cost_of_actions(&path), 4);
    }

    #[test]
    fn a_star_with_admissible_heuristic_is_optimal() {
        let line = Line { len: 8, goal: 7 };
        let path = a_star_search(&line, |s: &i32, p: &Line| (p.goal - s).abs() as f64).unwrap();
        assert_eq!(line.cost_of_actions(&path), 7);
    }

    #[test]
    fn start_at_goal_gives_empty_path() {
        let line = Line { len: 3, goal: 0 };
        assert!(breadth_first_search(&line).unwrap().is_empty());
        assert!(uniform_cost_search(&line).unwrap().is_empty());
        assert!(a_star_search(&line, null_heuristic).unwrap().is_empty());
    }

    #[test]
    fn unreachable_goal_reports_no_solution() {
        let line = Line { len: 3, goal: 10 };
        assert_eq!(breadth_first_search(&line), Err(NoSolution { expanded: 3 }));
        assert_eq!(uniform_cost_search(&line), Err(NoSolution { expanded: 3 }));
    }

    #[test]
    fn frontier_ties_pop_oldest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Entry { priority: 1.0, seq: 0, idx: 10 });
        heap.push(Entry { priority: 0.5, seq: 1, idx: 11 });
        heap.push(Entry { priority: 1.0, seq: 2, idx: 12 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![11, 10, 12]);
    }
}
