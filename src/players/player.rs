use crate::gameplay::Action;
use crate::gameplay::Game;
use rand::RngCore;

/// Anything that can take a seat's turn.
///
/// Randomness is always borrowed from the table, so a seeded table replays
/// every decision exactly.
pub trait Player {
    fn decide(&mut self, game: &Game, rng: &mut dyn RngCore) -> Action;
}
