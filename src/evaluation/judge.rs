use super::strength::Strength;
use crate::cards::Board;
use crate::cards::Hole;

/// Head-to-head result between the first and second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl From<std::cmp::Ordering> for Outcome {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Greater => Outcome::FirstWins,
            std::cmp::Ordering::Less => Outcome::SecondWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Each seat's evaluated hand and who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub strengths: [Strength; 2],
    pub outcome: Outcome,
}

/// Compares two holes over a shared board.
///
/// The showdown only ever consumes this contract, so tests can stand in a
/// fixed verdict without arranging real cards.
pub trait Judge {
    fn judge(&self, holes: [Hole; 2], board: &Board) -> Verdict;
}
