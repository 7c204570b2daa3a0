use super::entry::Kind;
use super::game::Game;
use super::phase::Phase;
use crate::evaluation::Judge;
use crate::other;

/// Street advancement.
impl Game {
    /// Closes the current street.
    ///
    /// Burns one card and turns over three for the flop, one each for turn
    /// and river, then opens a fresh betting round with the non-dealer to
    /// act. Closing the river settles the hand instead. Outside a live hand
    /// this is a no-op.
    pub fn advance(&self, judge: &dyn Judge) -> Self {
        match self.phase {
            Phase::River => self.showdown(judge),
            Phase::Preflop | Phase::Flop | Phase::Turn => {
                let mut next = self.clone();
                next.deck.burn();
                let cards = next.deck.deal(self.phase.n_revealed());
                next.board.extend(cards);
                next.phase = self.phase.next();
                next.note(
                    Kind::Board,
                    format!("*** {} *** [{}]", next.phase, next.board.pretty()),
                );
                for seat in next.seats.iter_mut() {
                    seat.reset_stake();
                }
                next.to_match = 0;
                next.min_raise = self.big_blind;
                next.actions = 0;
                next.aggressor = None;
                next.current = other(self.dealer);
                next.suggestion = self.big_blind.max(self.pot / 2);
                next
            }
            Phase::Idle | Phase::Showdown => self.clone(),
        }
    }
}
