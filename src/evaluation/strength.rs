use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::Hand;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The Ranking decides first, and the kicker ranks are used
/// to break ties between equal Rankings.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        let eval = Evaluator::from(hand);
        let value = eval.find_ranking();
        let kicks = eval.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(cards: &str) -> Strength {
        Strength::from(Hand::try_from(cards).unwrap())
    }

    #[test]
    fn kicker_breaks_pair_tie() {
        let a = strength("Ah Ad Kc 9s 7h 4d 2c");
        let b = strength("As Ac Qc 9d 7s 4h 2d");
        assert!(a > b);
    }

    #[test]
    fn flush_kicker_breaks_tie() {
        let a = strength("Ah Th 8h 6h 3h Kc Qd");
        let b = strength("As Ts 8s 6s 2s Kd Qc");
        assert!(a > b);
    }

    #[test]
    fn board_plays_for_both() {
        let a = strength("2c 3d Ah Kh Qh Jh Th");
        let b = strength("4c 5d Ah Kh Qh Jh Th");
        assert!(a == b);
    }

    #[test]
    fn flush_beats_straight() {
        assert!(strength("2h 5h 7h 9h Jh") > strength("9c Td Jh Qs Kc"));
    }

    #[test]
    fn full_house_beats_flush() {
        assert!(strength("3c 3d 3h 2s 2c") > strength("Ah Kh Qh Jh 9h"));
    }

    #[test]
    fn describes_category() {
        assert!(strength("6c 6d Ah Kh 9s").to_string() == "Pair of Sixes");
    }
}
