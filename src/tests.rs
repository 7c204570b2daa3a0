//! Whole-match properties, driven by random decisions from both seats.

use crate::cards::Deck;
use crate::evaluation::Referee;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::gameplay::Phase;
use crate::gameroom::Table;
use crate::players::Player;
use crate::players::Robot;
use crate::*;
use proptest::prelude::*;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One applied decision with the states on either side of it.
struct Step {
    before: Game,
    seat: Position,
    action: Action,
    after: Game,
}

/// Plays a match at the engine level. The human seat picks among its legal
/// options by index, the opponent draws from its usual table.
fn drive(seed: u64, draws: &[(usize, Probability)]) -> Vec<Step> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::default();
    let mut steps = Vec::new();
    for &(pick, r) in draws {
        if game.is_over() {
            break;
        }
        if !game.phase().is_betting() {
            game = game.deal(Deck::shuffled(&mut rng));
            continue;
        }
        let seat = game.current();
        let action = match seat {
            HERO => {
                let legal = game.legal();
                if legal.is_empty() {
                    break;
                }
                legal[pick % legal.len()]
            }
            _ => Robot::choose(&game, r),
        };
        let after = game.apply(seat, action, &Referee);
        steps.push(Step {
            before: game,
            seat,
            action,
            after: after.clone(),
        });
        game = after;
    }
    steps
}

fn decisions() -> impl Strategy<Value = Vec<(usize, Probability)>> {
    prop::collection::vec((0usize..5, 0.0 as Probability..1.0), 1..300)
}

proptest! {
    #[test]
    fn chips_are_conserved(seed in any::<u64>(), draws in decisions()) {
        for step in drive(seed, &draws) {
            prop_assert_eq!(step.after.total(), STACK * 2);
            prop_assert!(step.after.pot() >= 0);
            prop_assert!(step.after.seats().iter().all(|s| s.chips() >= 0));
        }
    }

    #[test]
    fn bets_never_shrink_within_a_street(seed in any::<u64>(), draws in decisions()) {
        for step in drive(seed, &draws) {
            let (a, b) = (&step.before, &step.after);
            if a.phase() == b.phase() && a.phase().is_betting() {
                prop_assert!(b.min_raise() >= a.min_raise());
                prop_assert!(b.to_match() >= a.to_match());
            }
        }
    }

    #[test]
    fn folding_hands_the_pot_across(seed in any::<u64>(), draws in decisions()) {
        for step in drive(seed, &draws).into_iter().filter(|s| s.action == Action::Fold) {
            let winner = other(step.seat);
            prop_assert_eq!(step.after.phase(), Phase::Showdown);
            prop_assert_eq!(step.after.winner(), Some(winner));
            prop_assert_eq!(step.after.pot(), 0);
            prop_assert!(step.after.seat(step.seat).folded());
            prop_assert_eq!(
                step.after.seat(winner).chips(),
                step.before.seat(winner).chips() + step.before.pot()
            );
        }
    }

    #[test]
    fn board_matches_street(seed in any::<u64>(), draws in decisions()) {
        for step in drive(seed, &draws) {
            let cards = step.after.board().len();
            match step.after.phase() {
                Phase::Preflop => prop_assert_eq!(cards, 0),
                Phase::Flop => prop_assert_eq!(cards, 3),
                Phase::Turn => prop_assert_eq!(cards, 4),
                Phase::River => prop_assert_eq!(cards, 5),
                Phase::Showdown => prop_assert!(cards <= 5),
                Phase::Idle => {}
            }
        }
    }

    #[test]
    fn table_only_yields_to_the_human(seed in any::<u64>(), picks in prop::collection::vec(0usize..5, 1..200)) {
        let mut table = Table::seeded(Config::default().seeded(seed));
        for pick in picks {
            let game = table.game();
            if game.awaits(HERO) {
                let legal = game.legal();
                let action = legal[pick % legal.len()];
                prop_assert!(table.act(action).is_ok());
            } else if game.is_over() {
                break;
            } else {
                prop_assert!(table.deal().is_ok());
            }
            prop_assert!(!table.game().awaits(VILLAIN));
            prop_assert_eq!(table.game().total(), STACK * 2);
        }
    }
}

/// Calls everything.
struct Station;
impl Player for Station {
    fn decide(&mut self, _: &Game, _: &mut dyn RngCore) -> Action {
        Action::Call
    }
}

#[test]
fn called_shove_runs_out_the_board() {
    let mut table = Table::seeded(Config::default().seeded(3)).with_opponent(Station);
    table.deal().unwrap();
    let game = table.act(Action::Shove).unwrap();
    assert!(game.phase() == Phase::Showdown);
    assert!(game.board().len() == 5);
    assert!(game.reveal());
    assert!(game.pot() == 0);
    assert!(game.total() == STACK * 2);
    let chips = [game.seat(HERO).chips(), game.seat(VILLAIN).chips()];
    assert!(chips == [STACK, STACK] || chips.contains(&0));
    assert!(table.history() == [(HERO, Action::Shove), (VILLAIN, Action::Call)]);
}

#[test]
fn match_ends_when_a_seat_busts() {
    let mut table = Table::seeded(Config::default().seeded(5)).with_opponent(Station);
    while !table.game().is_over() {
        table.deal().unwrap();
        let game = table.game();
        if game.awaits(HERO) {
            let action = match game.is_allowed(&Action::Shove) {
                true => Action::Shove,
                false => Action::Fold,
            };
            table.act(action).unwrap();
        }
    }
    let game = table.deal().unwrap();
    assert!(game.phase() == Phase::Idle);
    assert!(game.champion().is_some());
    assert!(game.log().last().unwrap().text().ends_with("wins the match! ***"));
}
