use super::action::Action;
use super::game::Game;
use crate::Chips;
use crate::HERO;
use crate::NAMES;
use crate::Position;
use crate::VILLAIN;

/// Human-seat queries. Pure reads used to vet input before it is applied.
impl Game {
    /// Options open to the human seat, empty unless it is their turn.
    ///
    /// Facing no bet the seat may check, otherwise fold or call; a call it
    /// cannot cover puts it all in for less. Raising needs chips beyond
    /// the call; going all in needs any chips at all. `Raise` carries the
    /// minimum total.
    pub fn legal(&self) -> Vec<Action> {
        let mut options = Vec::new();
        if !self.awaits(HERO) {
            return options;
        }
        let owed = self.owed(HERO);
        let chips = self.seat(HERO).chips();
        if owed <= 0 {
            options.push(Action::Check);
        } else {
            options.push(Action::Fold);
            options.push(Action::Call);
        }
        if chips > owed {
            options.push(Action::Raise(self.min_raise_total()));
        }
        if chips > 0 {
            options.push(Action::Shove);
        }
        options
    }
    /// True if an action of this kind is currently open to the human seat.
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.legal()
            .iter()
            .any(|legal| legal.label() == action.label())
    }
    /// What calling would cost, capped at the human seat's chips.
    pub fn to_call(&self) -> Chips {
        self.owed(HERO).min(self.seat(HERO).chips()).max(0)
    }
    /// Smallest total a raise must reach.
    pub fn min_raise_total(&self) -> Chips {
        self.to_match + self.min_raise
    }
    /// Largest total the human seat can reach: everything behind.
    pub fn max_raise_total(&self) -> Chips {
        self.seat(HERO).stake() + self.seat(HERO).chips()
    }
    /// Gap between the bet to match and what `seat` has in this street.
    pub fn owed(&self, seat: Position) -> Chips {
        self.to_match - self.seat(seat).stake()
    }
}

/// Match status.
impl Game {
    /// True while a street is live and `seat` is the one to act.
    pub fn awaits(&self, seat: Position) -> bool {
        self.phase.is_betting() && self.current == seat
    }
    /// The seat left with chips once the other is busted, between hands.
    pub fn champion(&self) -> Option<Position> {
        if self.phase.is_betting() {
            return None;
        }
        match (self.seat(HERO).is_busted(), self.seat(VILLAIN).is_busted()) {
            (false, false) => None,
            (false, true) => Some(HERO),
            (true, _) => Some(VILLAIN),
        }
    }
    /// A seat is busted and no hand is live.
    pub fn is_over(&self) -> bool {
        self.champion().is_some()
    }
    /// Name of the last hand's winner; `None` for a split or no result.
    pub fn winner_name(&self) -> Option<&'static str> {
        self.winner.map(|position| NAMES[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::evaluation::Referee;
    use crate::gameplay::Seat;

    fn dealt() -> Game {
        Game::default().deal(Deck::new())
    }

    #[test]
    fn small_blind_options() {
        let game = dealt();
        assert!(game.legal() == vec![Action::Fold, Action::Call, Action::Raise(40), Action::Shove]);
        assert!(game.to_call() == 10);
        assert!(game.min_raise_total() == 40);
        assert!(game.max_raise_total() == 1000);
    }

    #[test]
    fn free_check_options() {
        let game = dealt()
            .apply(HERO, Action::Call, &Referee)
            .apply(VILLAIN, Action::Check, &Referee)
            .apply(VILLAIN, Action::Check, &Referee);
        assert!(game.awaits(HERO));
        assert!(game.legal() == vec![Action::Check, Action::Raise(20), Action::Shove]);
        assert!(game.to_call() == 0);
    }

    #[test]
    fn nothing_to_do_off_turn() {
        let game = dealt().apply(HERO, Action::Call, &Referee);
        assert!(game.legal().is_empty());
        assert!(Game::default().legal().is_empty());
    }

    #[test]
    fn all_in_small_blind_may_still_call() {
        let mut game = Game::default();
        game.seats[HERO] = Seat::from(5);
        let game = game.deal(Deck::new());
        assert!(game.legal() == vec![Action::Fold, Action::Call]);
        assert!(game.to_call() == 0);
        assert!(game.max_raise_total() == 5);
    }

    #[test]
    fn short_opponent_blind_leaves_nothing_to_call() {
        let mut game = Game::default();
        game.seats[VILLAIN] = Seat::from(5);
        let game = game.deal(Deck::new());
        assert!(game.owed(HERO) == -5);
        assert!(game.to_call() == 0);
        assert!(game.legal() == vec![Action::Check, Action::Raise(25), Action::Shove]);
        let game = game.apply(HERO, Action::Check, &Referee);
        assert!(game.phase() == crate::gameplay::Phase::Showdown);
        assert!(game.board().len() == 5);
        assert!(game.total() == 1005);
    }

    #[test]
    fn max_raise_tracks_stack_and_stake() {
        let game = dealt();
        let seat = game.seat(HERO);
        assert!(game.max_raise_total() == seat.stake() + seat.chips());
    }

    #[test]
    fn champion_only_between_hands() {
        let mut game = dealt().apply(HERO, Action::Shove, &Referee);
        assert!(game.seat(HERO).chips() == 0);
        assert!(game.champion().is_none());
        game.phase = crate::gameplay::Phase::Showdown;
        assert!(game.champion() == Some(VILLAIN));
        assert!(game.is_over());
    }
}
