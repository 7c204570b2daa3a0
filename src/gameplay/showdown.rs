use super::entry::Kind;
use super::game::Game;
use super::phase::Phase;
use crate::HERO;
use crate::NAMES;
use crate::Position;
use crate::VILLAIN;
use crate::evaluation::Judge;
use crate::evaluation::Outcome;
use crate::other;

/// Hand settlement.
impl Game {
    /// Reveals both hands and pays the pot.
    ///
    /// A decisive verdict sends the whole pot to the winner. A tie splits
    /// it with the odd chip always going to seat 1: seat 0 receives
    /// `pot / 2` rounded down, seat 1 the rest.
    pub fn showdown(&self, judge: &dyn Judge) -> Self {
        let mut next = self.clone();
        next.reveal = true;
        next.note(Kind::System, "*** SHOWDOWN ***");
        let outcome = match (self.seats[HERO].hole(), self.seats[VILLAIN].hole()) {
            (Some(hero), Some(villain)) => {
                next.note(
                    Kind::Deal,
                    format!("{} shows [{}]", NAMES[VILLAIN], villain.pretty()),
                );
                let verdict = judge.judge([hero, villain], &self.board);
                for (position, strength) in verdict.strengths.iter().enumerate() {
                    next.note(Kind::Info, format!("{}: {}", NAMES[position], strength));
                }
                verdict.outcome
            }
            _ => {
                log::warn!("showdown without both hole cards, splitting");
                Outcome::Tie
            }
        };
        let pot = self.pot;
        match outcome {
            Outcome::FirstWins => next.award(HERO, pot),
            Outcome::SecondWins => next.award(VILLAIN, pot),
            Outcome::Tie => {
                let half = pot / 2;
                next.seats[HERO].win(half);
                next.seats[VILLAIN].win(pot - half);
                next.winner = None;
                next.note(
                    Kind::Win,
                    format!(
                        "Split pot (${} to {}, ${} to {}).",
                        half,
                        NAMES[HERO],
                        pot - half,
                        NAMES[VILLAIN]
                    ),
                );
                log::info!("split pot {}", pot);
            }
        }
        next.phase = Phase::Showdown;
        next.pot = 0;
        next
    }

    /// The other seat takes the pot uncontested. The folder's cards stay
    /// face down.
    pub(super) fn concede(&self, folder: Position) -> Self {
        let winner = other(folder);
        let pot = self.pot;
        let mut next = self.clone();
        next.seats[folder].fold();
        next.seats[winner].win(pot);
        next.winner = Some(winner);
        next.note(
            Kind::Win,
            format!(
                "{} wins pot (${}), {} folded.",
                NAMES[winner], pot, NAMES[folder]
            ),
        );
        log::info!("{} takes {} uncontested", NAMES[winner], pot);
        next.phase = Phase::Showdown;
        next.pot = 0;
        next.reveal = false;
        next
    }

    fn award(&mut self, winner: Position, pot: crate::Chips) {
        self.seats[winner].win(pot);
        self.winner = Some(winner);
        self.note(Kind::Win, format!("{} wins pot (${})", NAMES[winner], pot));
        log::info!("{} wins {} at showdown", NAMES[winner], pot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Deck;
    use crate::cards::Hole;
    use crate::evaluation::Referee;
    use crate::evaluation::Verdict;
    use crate::gameplay::Seat;

    /// Real hand descriptions, rigged outcome.
    struct Rigged(Outcome);
    impl Judge for Rigged {
        fn judge(&self, holes: [Hole; 2], board: &Board) -> Verdict {
            Verdict {
                outcome: self.0,
                ..Referee.judge(holes, board)
            }
        }
    }

    fn to_river(game: Game) -> Game {
        let mut game = game;
        while game.phase() != Phase::River {
            game = game.advance(&Referee);
        }
        game
    }

    #[test]
    fn split_pot_floors_seat_zero() {
        let mut game = to_river(Game::default().deal(Deck::new()));
        let holes = [game.seat(HERO).hole(), game.seat(VILLAIN).hole()];
        game.seats = [Seat::from(0), Seat::from(0)];
        game.seats[HERO].reset_hand(holes[HERO]);
        game.seats[VILLAIN].reset_hand(holes[VILLAIN]);
        game.pot = 101;
        let done = game.showdown(&Rigged(Outcome::Tie));
        assert!(done.seat(HERO).chips() == 50);
        assert!(done.seat(VILLAIN).chips() == 51);
        assert!(done.winner().is_none());
        assert!(done.winner_name().is_none());
        assert!(done.pot() == 0);
        assert!(done.phase() == Phase::Showdown);
    }

    #[test]
    fn decisive_verdict_pays_winner() {
        let game = to_river(Game::default().deal(Deck::new()));
        let before = game.seat(VILLAIN).chips();
        let done = game.showdown(&Rigged(Outcome::SecondWins));
        assert!(done.seat(VILLAIN).chips() == before + 30);
        assert!(done.winner() == Some(VILLAIN));
        assert!(done.winner_name() == Some("Villain"));
        assert!(done.reveal());
        assert!(done.log().last().unwrap().text() == "Villain wins pot ($30)");
    }

    #[test]
    fn showdown_describes_both_hands() {
        let deck = Deck::try_from("Ah Ad 7c 2s 9c Kh Kd 3s 8c 4d 8d 5h").unwrap();
        let done = to_river(Game::default().deal(deck)).showdown(&Referee);
        let lines = done
            .log()
            .iter()
            .map(|e| e.text().to_string())
            .collect::<Vec<_>>();
        assert!(lines.contains(&String::from("Villain shows [7\u{2663} 2\u{2660}]")));
        assert!(lines.contains(&String::from("You: Two Pair, Aces and Kings")));
        assert!(lines.contains(&String::from("Villain: Pair of Kings")));
        assert!(done.winner() == Some(HERO));
        assert!(done.seat(HERO).chips() == 1020);
    }
}
