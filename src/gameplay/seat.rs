use crate::Chips;
use crate::cards::Hole;

/// A player's state at the table.
///
/// - `chips`: behind, not yet committed
/// - `stake`: committed this street only; reset when a street opens
/// - `hole`: private cards, absent between matches
/// - `folded`: out of the current hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    chips: Chips,
    stake: Chips,
    hole: Option<Hole>,
    folded: bool,
}

impl From<Chips> for Seat {
    fn from(chips: Chips) -> Self {
        Self {
            chips,
            stake: 0,
            hole: None,
            folded: false,
        }
    }
}

impl Seat {
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn is_busted(&self) -> bool {
        self.chips <= 0
    }
    /// Commits chips to the pot. Never more than what is behind.
    pub(crate) fn bet(&mut self, bet: Chips) -> Chips {
        let bet = bet.min(self.chips).max(0);
        self.chips -= bet;
        self.stake += bet;
        bet
    }
    /// Takes chips back out of this street's stake. Never more than the
    /// stake.
    pub(crate) fn refund(&mut self, refund: Chips) -> Chips {
        let refund = refund.min(self.stake).max(0);
        self.stake -= refund;
        self.chips += refund;
        refund
    }
    pub(crate) fn win(&mut self, win: Chips) {
        self.chips += win;
    }
    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }
    pub(crate) fn reset_stake(&mut self) {
        self.stake = 0;
    }
    pub(crate) fn reset_hand(&mut self, hole: Option<Hole>) {
        self.hole = hole;
        self.folded = false;
        self.stake = 0;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match (self.folded, self.chips) {
            (true, _) => "F",
            (false, 0) => "S",
            (false, _) => "P",
        };
        write!(f, "{} ${:>5} (${:>4} in)", state, self.chips, self.stake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bets_are_clamped_to_chips() {
        let mut seat = Seat::from(50);
        assert!(seat.bet(80) == 50);
        assert!(seat.chips() == 0);
        assert!(seat.stake() == 50);
    }

    #[test]
    fn refunds_are_clamped_to_stake() {
        let mut seat = Seat::from(50);
        seat.bet(20);
        assert!(seat.refund(30) == 20);
        assert!(seat.chips() == 50);
        assert!(seat.stake() == 0);
    }

    #[test]
    fn new_hand_clears_street_state() {
        let mut seat = Seat::from(100);
        seat.bet(20);
        seat.fold();
        seat.reset_hand(None);
        assert!(!seat.folded());
        assert!(seat.stake() == 0);
        assert!(seat.chips() == 80);
    }
}
