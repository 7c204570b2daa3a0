use super::action::Action;
use super::entry::Kind;
use super::game::Game;
use crate::Chips;
use crate::NAMES;
use crate::Position;
use crate::evaluation::Judge;
use crate::other;

/// Action application.
impl Game {
    /// Applies one betting decision for `seat` and returns the next state.
    ///
    /// Turn ownership is not checked here; the caller decides who may act.
    /// After the action, in order: a covered all-in runs the board out to
    /// showdown, a closed round deals the next street, and otherwise the
    /// turn passes across the table.
    pub fn apply(&self, seat: Position, action: Action, judge: &dyn Judge) -> Self {
        let mut next = self.clone();
        next.actions += 1;
        match action {
            Action::Fold => {
                next.note(Kind::Action, format!("{} folds.", NAMES[seat]));
                return next.concede(seat);
            }
            Action::Check => next.note(Kind::Action, format!("{} checks.", NAMES[seat])),
            Action::Call => next.call(seat),
            Action::Raise(total) => next.raise(seat, total),
            Action::Shove => next.shove(seat),
        }
        if next.is_run_out() {
            log::trace!("all in, running out the board");
            next.return_uncalled();
            next.reveal = true;
            return next.run_out(judge);
        }
        if next.is_round_closed() {
            return next.advance(judge);
        }
        next.current = other(seat);
        next
    }

    /// Deals every remaining street without further betting.
    pub fn run_out(&self, judge: &dyn Judge) -> Self {
        let mut game = self.clone();
        while game.phase.is_betting() {
            game = game.advance(judge);
        }
        game
    }
}

/// Chip movement.
impl Game {
    /// A seat already above the bet to match (only after a short big
    /// blind) takes the difference back instead of paying.
    fn call(&mut self, seat: Position) {
        let owed = self.owed(seat);
        if owed < 0 {
            let back = self.seats[seat].refund(-owed);
            self.pot -= back;
            self.note(
                Kind::Action,
                format!("{} calls, ${} returned.", NAMES[seat], back),
            );
            return;
        }
        let paid = self.seats[seat].bet(owed);
        self.pot += paid;
        self.note(Kind::Action, format!("{} calls ${}.", NAMES[seat], paid));
    }
    /// `total` is clamped up to the bet to match, then down to everything
    /// the seat has. A seat that cannot cover the bet commits its stack and
    /// leaves the bet to match where it was.
    fn raise(&mut self, seat: Position, total: Chips) {
        let behind = self.seats[seat].chips();
        let stake = self.seats[seat].stake();
        let total = total.max(self.to_match).min(stake + behind);
        let paid = self.seats[seat].bet(total - stake);
        let total = stake + paid;
        self.pot += paid;
        if paid == behind {
            self.note(
                Kind::Action,
                format!("{} goes all-in (${})!", NAMES[seat], paid),
            );
        } else if self.to_match == 0 {
            self.note(Kind::Action, format!("{} bets ${}.", NAMES[seat], total));
        } else {
            self.note(
                Kind::Action,
                format!("{} raises to ${}.", NAMES[seat], total),
            );
        }
        if total >= self.to_match {
            self.escalate(seat, total);
        }
    }
    fn shove(&mut self, seat: Position) {
        let behind = self.seats[seat].chips();
        let paid = self.seats[seat].bet(behind);
        let total = self.seats[seat].stake();
        self.pot += paid;
        self.note(
            Kind::Action,
            format!("{} goes all-in (${})!", NAMES[seat], paid),
        );
        if total > self.to_match {
            self.escalate(seat, total);
        }
    }
    /// Hands back the part of the larger stake the other seat can never
    /// call.
    fn return_uncalled(&mut self) {
        let (high, low) = match self.seats[0].stake() >= self.seats[1].stake() {
            true => (0, 1),
            false => (1, 0),
        };
        let excess = self.seats[high].stake() - self.seats[low].stake();
        if excess > 0 {
            let back = self.seats[high].refund(excess);
            self.pot -= back;
            self.note(
                Kind::Action,
                format!("Uncalled ${} returned to {}.", back, NAMES[high]),
            );
        }
    }
    /// `seat` now leads the betting at `total`.
    fn escalate(&mut self, seat: Position, total: Chips) {
        self.min_raise = self.min_raise.max(total - self.to_match);
        self.to_match = total;
        self.aggressor = Some(seat);
    }
}

/// Round-closure predicates.
impl Game {
    /// Both seats have acted this street and their stakes agree.
    pub(super) fn is_round_closed(&self) -> bool {
        self.actions >= 2 && self.is_matched()
    }
    /// Nobody can bet any more: both seats are all in, or one is and the
    /// other has put in at least as much this street.
    pub(super) fn is_run_out(&self) -> bool {
        let [a, b] = &self.seats;
        match (a.chips() == 0, b.chips() == 0) {
            (true, true) => true,
            (true, false) => a.stake() <= b.stake(),
            (false, true) => b.stake() <= a.stake(),
            (false, false) => false,
        }
    }
    fn is_matched(&self) -> bool {
        self.seats[0].stake() == self.seats[1].stake()
    }
}
