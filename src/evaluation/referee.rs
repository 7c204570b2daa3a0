use super::judge::Judge;
use super::judge::Verdict;
use super::strength::Strength;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;

/// Best five of seven, backed by the bitmask Evaluator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Referee;

impl Judge for Referee {
    fn judge(&self, holes: [Hole; 2], board: &Board) -> Verdict {
        let board = Hand::from(board);
        let strengths = holes.map(|hole| Strength::from(Hand::add(Hand::from(hole), board)));
        log::trace!("{} vs {}", strengths[0], strengths[1]);
        Verdict {
            strengths,
            outcome: strengths[0].cmp(&strengths[1]).into(),
        }
    }
}
