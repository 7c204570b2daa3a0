use super::player::Player;
use crate::Chips;
use crate::Probability;
use crate::VILLAIN;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::gameplay::Phase;
use rand::Rng;
use rand::RngCore;

/// The computer opponent.
///
/// A fixed table of cumulative thresholds over one uniform draw, keyed on
/// the street and on what it costs to continue. It never looks at cards.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Player for Robot {
    fn decide(&mut self, game: &Game, rng: &mut dyn RngCore) -> Action {
        let r = rng.random::<Probability>();
        let action = Self::choose(game, r);
        log::trace!("robot drew {:.3} -> {:?}", r, action);
        action
    }
}

impl Robot {
    /// Pure decision for draw `r` in `[0, 1)`.
    pub fn choose(game: &Game, r: Probability) -> Action {
        match game.phase() {
            Phase::Preflop => Self::preflop(game, r),
            _ => Self::postflop(game, r),
        }
    }

    fn preflop(game: &Game, r: Probability) -> Action {
        let owed = game.owed(VILLAIN);
        let blind = game.big_blind();
        let bet = game.to_match();
        match owed {
            0 if r < 0.60 => Action::Check,
            0 if r < 0.85 => Action::Raise(blind * 2 + bet),
            0 => Action::Raise(blind * 3 + bet),
            _ if owed <= blind * 2 => match r {
                r if r < 0.70 => Action::Call,
                r if r < 0.85 => Self::reraise(game),
                _ => Action::Fold,
            },
            _ => match r {
                r if r < 0.50 => Action::Call,
                r if r < 0.70 => Action::Fold,
                _ => Self::reraise(game),
            },
        }
    }

    fn postflop(game: &Game, r: Probability) -> Action {
        let owed = game.owed(VILLAIN);
        let pot = game.pot() + owed;
        if owed == 0 {
            return match r {
                r if r < 0.50 => Action::Check,
                r => {
                    let r = r as f64;
                    let size = (pot as f64 * (0.33 + r * 0.67)).floor() as Chips;
                    Action::Raise(size.max(game.big_blind()) + game.to_match())
                }
            };
        }
        let odds = owed as Probability / pot as Probability;
        match odds {
            odds if odds < 0.30 => match r {
                r if r < 0.80 => Action::Call,
                _ => Self::reraise(game),
            },
            odds if odds < 0.50 => match r {
                r if r < 0.55 => Action::Call,
                r if r < 0.75 => Action::Fold,
                _ => Self::reraise(game),
            },
            _ => match r {
                r if r < 0.35 => Action::Call,
                _ => Action::Fold,
            },
        }
    }

    /// Double the amount owed, on top of the current bet.
    fn reraise(game: &Game) -> Action {
        Action::Raise(game.owed(VILLAIN) * 2 + game.to_match())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HERO;
    use crate::cards::Deck;
    use crate::evaluation::Referee;

    /// Villain deals, so it is first to act preflop.
    fn villain_on_button() -> Game {
        Game::default()
            .deal(Deck::new())
            .apply(HERO, Action::Fold, &Referee)
            .deal(Deck::new())
    }

    #[test]
    fn completes_small_blind_mostly() {
        let game = villain_on_button();
        assert!(game.awaits(VILLAIN));
        assert!(Robot::choose(&game, 0.10) == Action::Call);
        assert!(Robot::choose(&game, 0.80) == Action::Raise(40));
        assert!(Robot::choose(&game, 0.90) == Action::Fold);
    }

    #[test]
    fn checks_or_raises_option() {
        let game = Game::default()
            .deal(Deck::new())
            .apply(HERO, Action::Call, &Referee);
        assert!(Robot::choose(&game, 0.59) == Action::Check);
        assert!(Robot::choose(&game, 0.60) == Action::Raise(60));
        assert!(Robot::choose(&game, 0.90) == Action::Raise(80));
    }

    #[test]
    fn facing_big_raise_preflop() {
        let game = Game::default()
            .deal(Deck::new())
            .apply(HERO, Action::Raise(200), &Referee);
        assert!(Robot::choose(&game, 0.49) == Action::Call);
        assert!(Robot::choose(&game, 0.69) == Action::Fold);
        assert!(Robot::choose(&game, 0.70) == Action::Raise(560));
    }

    #[test]
    fn postflop_bet_sizing() {
        let game = Game::default()
            .deal(Deck::new())
            .apply(HERO, Action::Call, &Referee)
            .apply(VILLAIN, Action::Check, &Referee);
        assert!(game.phase() == Phase::Flop);
        assert!(Robot::choose(&game, 0.25) == Action::Check);
        assert!(Robot::choose(&game, 0.50) == Action::Raise(26));
        assert!(Robot::choose(&game, 0.99) == Action::Raise(39));
    }

    #[test]
    fn bet_sizing_floors_in_double_precision() {
        let game = Game::default()
            .deal(Deck::new())
            .apply(HERO, Action::Call, &Referee)
            .apply(VILLAIN, Action::Check, &Referee);
        for i in 0..1000 {
            let r = 0.5 + i as Probability / 2000.0;
            let size = (40.0 * (0.33 + r as f64 * 0.67)).floor() as Chips;
            assert!(Robot::choose(&game, r) == Action::Raise(size.max(20)));
        }
    }

    #[test]
    fn pot_odds_bands() {
        let flop = Game::default()
            .deal(Deck::new())
            .apply(HERO, Action::Call, &Referee)
            .apply(VILLAIN, Action::Check, &Referee)
            .apply(VILLAIN, Action::Check, &Referee);
        let cheap = flop.apply(HERO, Action::Raise(10), &Referee);
        assert!(Robot::choose(&cheap, 0.79) == Action::Call);
        assert!(Robot::choose(&cheap, 0.80) == Action::Raise(30));
        let medium = flop.apply(HERO, Action::Raise(40), &Referee);
        assert!(Robot::choose(&medium, 0.54) == Action::Call);
        assert!(Robot::choose(&medium, 0.74) == Action::Fold);
        assert!(Robot::choose(&medium, 0.75) == Action::Raise(120));
        let large = flop.apply(HERO, Action::Raise(400), &Referee);
        assert!(Robot::choose(&large, 0.56) == Action::Fold);
        assert!(Robot::choose(&large, 0.99) == Action::Raise(1200));
    }
}
