use log::debug;
use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, PuzzleError};

/// A move of the blank: it exchanges with the tile above, below, left or right of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset of the blank after the move.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown move '{}'", s))
    }
}

/// The six stored 3x3 start layouts.
pub const FIXTURES: [[u32; 9]; 6] = [
    [1, 0, 2, 3, 4, 5, 6, 7, 8],
    [1, 7, 8, 2, 3, 4, 5, 6, 0],
    [4, 3, 2, 7, 0, 5, 1, 6, 8],
    [5, 1, 3, 4, 0, 2, 6, 7, 8],
    [1, 2, 5, 7, 6, 8, 0, 4, 3],
    [0, 3, 1, 6, 8, 2, 7, 5, 4],
];

/// One placement of the tiles on an N x N board.
///
/// States are never modified once built: [`PuzzleState::result`] returns a
/// fresh state, so a search may keep any number of them around. Two states are
/// equal exactly when their grids are, and the derived `Hash` agrees with that
/// because the blank position is a function of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    size: usize,
    cells: Vec<Vec<u32>>,
    blank: (usize, usize),
}

impl PuzzleState {
    /// Builds a state from `size * size` numbers read row-major.
    ///
    /// The numbers must be a permutation of `0..size * size`; 0 is the blank.
    pub fn new(numbers: &[u32], size: usize) -> Result<Self, ConfigError> {
        if size < 2 {
            return Err(ConfigError::SizeTooSmall(size));
        }
        let count = size * size;
        if numbers.len() != count {
            return Err(ConfigError::LayoutLength {
                size,
                expected: count,
                actual: numbers.len(),
            });
        }

        let mut seen = vec![false; count];
        let mut cells = Vec::with_capacity(size);
        let mut blank = (0, 0);

        for (row, chunk) in numbers.chunks(size).enumerate() {
            for (col, &value) in chunk.iter().enumerate() {
                let slot = seen.get_mut(value as usize);
                match slot {
                    Some(slot) if !*slot => *slot = true,
                    _ => return Err(ConfigError::LayoutValue { value, cells: count }),
                }
                if value == 0 {
                    blank = (row, col);
                }
            }
            cells.push(chunk.to_vec());
        }

        Ok(Self { size, cells, blank })
    }

    /// The solved board: blank in the top-left corner, then 1, 2, ... row-major.
    pub fn goal(size: usize) -> Result<Self, ConfigError> {
        let numbers: Vec<u32> = (0..(size * size) as u32).collect();
        Self::new(&numbers, size)
    }

    /// Loads one of the six stored 3x3 layouts.
    pub fn fixture(index: usize) -> Result<Self, ConfigError> {
        let numbers = FIXTURES.get(index).ok_or(ConfigError::FixtureOutOfRange {
            index,
            count: FIXTURES.len(),
        })?;
        Self::new(numbers, 3)
    }

    /// Starts from the goal and applies `moves` uniformly random legal moves.
    ///
    /// Every state produced this way is solvable.
    pub fn shuffled<R: Rng + ?Sized>(
        size: usize,
        moves: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut puzzle = Self::goal(size)?;
        for _ in 0..moves {
            let legal = puzzle.legal_moves();
            if let Some(next) = legal.choose(rng).and_then(|&mv| puzzle.try_move(mv)) {
                puzzle = next;
            }
        }
        debug!("shuffled a {0}x{0} puzzle with {1} random moves", size, moves);
        Ok(puzzle)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        self.blank
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The grid read row-major.
    pub fn numbers(&self) -> Vec<u32> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Moves available to the blank, in the order up, down, left, right.
    pub fn legal_moves(&self) -> Vec<Move> {
        let (row, col) = self.blank;
        let last = self.size - 1;
        let mut moves = Vec::with_capacity(4);
        if row != 0 {
            moves.push(Move::Up);
        }
        if row != last {
            moves.push(Move::Down);
        }
        if col != 0 {
            moves.push(Move::Left);
        }
        if col != last {
            moves.push(Move::Right);
        }
        moves
    }

    fn target(&self, mv: Move) -> Option<(usize, usize)> {
        let (dr, dc) = mv.as_offset();
        let row = self.blank.0.checked_add_signed(dr)?;
        let col = self.blank.1.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// Returns the state reached by moving the blank; `self` is left untouched.
    pub fn result(&self, mv: Move) -> Result<Self, PuzzleError> {
        self.try_move(mv).ok_or(PuzzleError::IllegalMove {
            mv,
            row: self.blank.0,
            col: self.blank.1,
        })
    }

    /// Like [`result`](Self::result) but returns `None` for an illegal move.
    pub fn try_move(&self, mv: Move) -> Option<Self> {
        let (new_row, new_col) = self.target(mv)?;
        let (row, col) = self.blank;

        let mut cells = self.cells.clone();
        cells[row][col] = cells[new_row][new_col];
        cells[new_row][new_col] = 0;

        Some(Self {
            size: self.size,
            cells,
            blank: (new_row, new_col),
        })
    }

    /// Applies a whole sequence of moves, failing on the first illegal one.
    pub fn apply_all(&self, moves: &[Move]) -> Result<Self, PuzzleError> {
        moves.iter().try_fold(self.clone(), |state, &mv| state.result(mv))
    }

    pub fn is_goal(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .zip(0u32..)
            .all(|(&value, expected)| value == expected)
    }

    /// Whether the goal is reachable from this layout.
    ///
    /// Horizontal moves never change the inversion count. A vertical move
    /// jumps a tile over `size - 1` others, so on odd boards the inversion
    /// parity is fixed, and on even boards the parity of inversions plus the
    /// blank's row is fixed. The goal has no inversions and the blank in row 0.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.numbers());
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank.0) % 2 == 0
        }
    }
}

fn count_inversions(flattened: &[u32]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = ((self.size * self.size - 1).to_string()).len();
        let line = "-".repeat(self.size * (width + 3) + 1);

        write!(f, "{}", line)?;
        for row in &self.cells {
            writeln!(f)?;
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, " {:>width$} |", "", width = width)?;
                } else {
                    write!(f, " {:>width$} |", val, width = width)?;
                }
            }
            writeln!(f)?;
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
