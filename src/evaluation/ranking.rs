use crate::cards::Rank;

/// A poker hand's category, with the ranks that define it.
///
/// Variants are declared weakest first so the derived Ord ranks categories
/// correctly; within a category the defining ranks break ties, and any
/// remaining tie is settled by Kickers.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// Ranks still eligible to kick once the defining ranks are removed.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::FourOAK(hi)
            | Ranking::Flush(hi) => !u16::from(hi),
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "{} High", r.name()),
            Ranking::OnePair(r) => write!(f, "Pair of {}", r.plural()),
            Ranking::TwoPair(hi, lo) => {
                write!(f, "Two Pair, {} and {}", hi.plural(), lo.plural())
            }
            Ranking::ThreeOAK(r) => write!(f, "Three of a Kind, {}", r.plural()),
            Ranking::Straight(r) => write!(f, "Straight, {} High", r.name()),
            Ranking::Flush(r) => write!(f, "Flush, {} High", r.name()),
            Ranking::FullHouse(trips, pair) => {
                write!(f, "Full House, {} over {}", trips.plural(), pair.plural())
            }
            Ranking::FourOAK(r) => write!(f, "Four of a Kind, {}", r.plural()),
            Ranking::StraightFlush(Rank::Ace) => write!(f, "Royal Flush"),
            Ranking::StraightFlush(r) => write!(f, "Straight Flush, {} High", r.name()),
        }
    }
}
