use rand::Rng;

use crate::agent::Agent;
use crate::error::{ConfigError, PuzzleError};
use crate::puzzle::{PuzzleState, FIXTURES};

/// Parameters of one solving run, checked before any puzzle is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub size: usize,
    /// Random legal moves applied to the goal when no fixture is loaded.
    pub moves: i64,
    /// Stored 3x3 layout to start from instead of a shuffle.
    pub load: Option<usize>,
    pub agent: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 3,
            moves: 30,
            load: None,
            agent: 0,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.size < 2 {
            return Err(ConfigError::SizeTooSmall(self.size).into());
        }
        if self.moves < 0 {
            return Err(ConfigError::NegativeMoves(self.moves).into());
        }
        if let Some(index) = self.load {
            if self.size != 3 {
                return Err(ConfigError::FixtureSize(self.size).into());
            }
            if index >= FIXTURES.len() {
                return Err(ConfigError::FixtureOutOfRange {
                    index,
                    count: FIXTURES.len(),
                }
                .into());
            }
        }
        self.agent().map(|_| ())
    }

    pub fn agent(&self) -> Result<Agent, PuzzleError> {
        Agent::try_from(self.agent)
    }

    /// The start state: the requested fixture, or a shuffled goal.
    pub fn build_puzzle<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PuzzleState, PuzzleError> {
        self.validate()?;
        let puzzle = match self.load {
            Some(index) => PuzzleState::fixture(index)?,
            None => PuzzleState::shuffled(self.size, self.moves as usize, rng)?,
        };
        Ok(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn config(size: usize, moves: i64, load: Option<usize>, agent: usize) -> RunConfig {
        RunConfig {
            size,
            moves,
            load,
            agent,
        }
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(RunConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_domain_parameters() {
        let cases: [(RunConfig, PuzzleError); 5] = [
            (config(1, 30, None, 0), ConfigError::SizeTooSmall(1).into()),
            (config(3, -1, None, 0), ConfigError::NegativeMoves(-1).into()),
            (config(4, 30, Some(0), 0), ConfigError::FixtureSize(4).into()),
            (
                config(3, 30, Some(6), 0),
                ConfigError::FixtureOutOfRange { index: 6, count: 6 }.into(),
            ),
            (config(3, 30, None, 9), PuzzleError::InvalidAgentIndex(9)),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected), "{:?}", config);
        }
    }

    #[test]
    fn builds_fixture_or_shuffle() {
        let mut rng = StdRng::seed_from_u64(3);
        let fixture = config(3, 30, Some(2), 0).build_puzzle(&mut rng).unwrap();
        assert_eq!(fixture, PuzzleState::fixture(2).unwrap());

        let shuffled = config(4, 0, None, 0).build_puzzle(&mut rng).unwrap();
        assert!(shuffled.is_goal());
        assert_eq!(shuffled.size(), 4);
    }
}
