use crate::Chips;
use crate::Config;
use crate::HERO;
use crate::MAX_CASCADE;
use crate::NAMES;
use crate::Position;
use crate::VILLAIN;
use crate::cards::Deck;
use crate::evaluation::Judge;
use crate::evaluation::Referee;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::players::Player;
use crate::players::Robot;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Where the match is played.
///
/// The table owns the current [`Game`], the one entropy source used for
/// both shuffling and the opponent's draws, the opponent itself and the
/// hand judge. It is also the turn gate: the engine applies whatever it is
/// given, so only the table decides who may act.
///
/// Every external input (a deal or a human action) is applied once, then
/// the opponent's turns are resolved in a bounded loop before control
/// returns, so callers only ever observe states that wait on the human or
/// on a new deal.
pub struct Table<R: RngCore = SmallRng> {
    game: Game,
    config: Config,
    rng: R,
    opponent: Box<dyn Player>,
    judge: Box<dyn Judge>,
    history: Vec<(Position, Action)>,
}

impl Table<SmallRng> {
    /// Seeds from `config.seed` when present, otherwise from the thread RNG.
    pub fn seeded(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::new(config, rng)
    }
}

impl<R: RngCore> Table<R> {
    pub fn new(config: Config, rng: R) -> Self {
        Self {
            game: Game::new(&config),
            config,
            rng,
            opponent: Box::new(Robot),
            judge: Box::new(Referee),
            history: Vec::new(),
        }
    }
    pub fn with_opponent(mut self, opponent: impl Player + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }
    pub fn with_judge(mut self, judge: impl Judge + 'static) -> Self {
        self.judge = Box::new(judge);
        self
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    /// Decisions applied since the last deal, in order.
    pub fn history(&self) -> &[(Position, Action)] {
        &self.history
    }
}

/// Driving interface.
impl<R: RngCore> Table<R> {
    /// Shuffles a fresh deck and starts the next hand, or declares the
    /// match winner if a seat is busted.
    pub fn deal(&mut self) -> anyhow::Result<&Game> {
        if self.game.phase().is_betting() {
            anyhow::bail!("hand #{} is still being played", self.game.hand());
        }
        let deck = Deck::shuffled(&mut self.rng);
        self.history.clear();
        self.game = self.game.deal(deck);
        self.resolve();
        Ok(&self.game)
    }
    /// Applies a human decision, then lets the opponent respond.
    pub fn act(&mut self, action: Action) -> anyhow::Result<&Game> {
        if !self.game.awaits(HERO) {
            log::warn!("rejected {:?}: not {}'s turn", action, NAMES[HERO]);
            anyhow::bail!("it is not {}'s turn", NAMES[HERO]);
        }
        if !self.game.is_allowed(&action) {
            log::warn!("rejected {:?}: not a legal option", action);
            anyhow::bail!("{} is not a legal option right now", action.label());
        }
        self.play(HERO, action);
        self.resolve();
        Ok(&self.game)
    }
    /// String-tagged entry point.
    ///
    /// Names are `fold`, `check`, `call`, `raise` and `allin`; a raise
    /// without an amount goes to the minimum legal total. Unknown names
    /// leave the match exactly as it was.
    pub fn command(&mut self, name: &str, amount: Option<Chips>) -> anyhow::Result<&Game> {
        let action = match name {
            "fold" => Action::Fold,
            "check" => Action::Check,
            "call" => Action::Call,
            "raise" => Action::Raise(amount.unwrap_or(self.game.min_raise_total())),
            "allin" => Action::Shove,
            _ => {
                log::warn!("ignoring unknown command {:?}", name);
                return Ok(&self.game);
            }
        };
        self.act(action)
    }
    /// A new match with the same configuration.
    pub fn restart(&mut self) -> &Game {
        log::info!("new match");
        self.history.clear();
        self.game = Game::new(&self.config);
        &self.game
    }
}

/// Turn resolution.
impl<R: RngCore> Table<R> {
    fn play(&mut self, seat: Position, action: Action) {
        log::debug!("{} {:?}", NAMES[seat], action);
        self.history.push((seat, action));
        self.game = self.game.apply(seat, action, self.judge.as_ref());
    }
    /// Lets the opponent act for as long as it holds the turn.
    fn resolve(&mut self) {
        for _ in 0..MAX_CASCADE {
            if !self.game.awaits(VILLAIN) {
                return;
            }
            let action = self.opponent.decide(&self.game, &mut self.rng);
            self.play(VILLAIN, action);
        }
        if self.game.awaits(VILLAIN) {
            log::warn!("opponent still to act after {} decisions", MAX_CASCADE);
        }
    }
}
