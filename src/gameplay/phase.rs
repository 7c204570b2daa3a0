/// Where a hand stands.
///
/// Phases only move forward within a hand. A fold skips straight to
/// Showdown; Idle is the state between matches and before the first deal.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// True while a seat's action is awaited.
    pub fn is_betting(&self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }
    /// Community cards turned over when entering the street after this one.
    /// River has no next street: it goes to showdown.
    pub fn n_revealed(&self) -> usize {
        match self {
            Phase::Preflop => 3,
            Phase::Flop | Phase::Turn => 1,
            _ => 0,
        }
    }
    pub fn next(&self) -> Self {
        match self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Showdown,
            other => *other,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "IDLE"),
            Phase::Preflop => write!(f, "PREFLOP"),
            Phase::Flop => write!(f, "FLOP"),
            Phase::Turn => write!(f, "TURN"),
            Phase::River => write!(f, "RIVER"),
            Phase::Showdown => write!(f, "SHOWDOWN"),
        }
    }
}
