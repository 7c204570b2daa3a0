use super::entry::Entry;
use super::entry::Kind;
use super::phase::Phase;
use super::seat::Seat;
use crate::Chips;
use crate::Config;
use crate::N;
use crate::NAMES;
use crate::Position;
use crate::cards::Board;
use crate::cards::Deck;
use crate::other;
use colored::*;

/// The whole match, as one value.
///
/// `Game` holds everything needed to continue play: both seats, the pot,
/// the board, the undealt deck, the live betting-round bookkeeping and the
/// narrative log. Transitions are functional: [`deal`](Self::deal),
/// [`apply`](Self::apply), [`advance`](Self::advance) and
/// [`showdown`](Self::showdown) each return a fresh `Game` and leave the
/// receiver untouched, so any snapshot can be kept, compared or replayed.
///
/// # Fields
///
/// - `seats`: index 0 is the human ("You"), index 1 the opponent ("Villain")
/// - `dealer`: also the small blind; acts first preflop, last postflop
/// - `current`: seat whose action is awaited; meaningless outside a street
/// - `to_match`: stake every seat must reach to stay in this street
/// - `min_raise`: smallest legal raise increment; never shrinks within a street
/// - `actions` / `aggressor`: round-closure bookkeeping
/// - `winner`: last hand's winner, `None` for a split or before any result
/// - `reveal`: opponent's cards are face up
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub(super) phase: Phase,
    pub(super) seats: [Seat; N],
    pub(super) dealer: Position,
    pub(super) board: Board,
    pub(super) pot: Chips,
    #[cfg_attr(feature = "client", serde(skip))]
    pub(super) deck: Deck,
    pub(super) current: Position,
    pub(super) to_match: Chips,
    pub(super) min_raise: Chips,
    pub(super) actions: usize,
    pub(super) aggressor: Option<Position>,
    pub(super) hand: usize,
    pub(super) small_blind: Chips,
    pub(super) big_blind: Chips,
    pub(super) suggestion: Chips,
    pub(super) log: Vec<Entry>,
    pub(super) winner: Option<Position>,
    pub(super) reveal: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Match entry points.
impl Game {
    /// A fresh match: idle, both seats at the starting stack.
    pub fn new(config: &Config) -> Self {
        let mut game = Self {
            phase: Phase::Idle,
            seats: [Seat::from(config.stack); N],
            dealer: 0,
            board: Board::new(),
            pot: 0,
            deck: Deck::new(),
            current: 0,
            to_match: 0,
            min_raise: config.big_blind,
            actions: 0,
            aggressor: None,
            hand: 0,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            suggestion: config.big_blind,
            log: Vec::new(),
            winner: None,
            reveal: false,
        };
        game.note(Kind::System, "--- Welcome to Heads Up Poker ---");
        game.note(Kind::System, "Deal to start a new hand.");
        game
    }

    /// Starts the next hand from the given deck.
    ///
    /// If a seat is busted the match is over instead: the solvent seat is
    /// announced and nothing else changes. Otherwise the button moves (it
    /// stays on seat 0 for the first hand), seat 0 takes the first two
    /// cards and seat 1 the next two, and both blinds go in, each capped at
    /// what the seat has behind. The dealer posts the small blind and is
    /// first to act.
    pub fn deal(&self, mut deck: Deck) -> Self {
        let mut next = self.clone();
        if let Some(champion) = self.champion() {
            next.note(
                Kind::System,
                format!("*** {} wins the match! ***", NAMES[champion]),
            );
            next.phase = Phase::Idle;
            log::info!("match over after {} hands", self.hand);
            return next;
        }
        let dealer = match self.hand {
            0 => 0,
            _ => other(self.dealer),
        };
        let blind = other(dealer);
        for seat in next.seats.iter_mut() {
            seat.reset_hand(deck.hole());
        }
        let sb = next.seats[dealer].bet(self.small_blind);
        let bb = next.seats[blind].bet(self.big_blind);
        next.phase = Phase::Preflop;
        next.dealer = dealer;
        next.board = Board::new();
        next.pot = sb + bb;
        next.deck = deck;
        next.current = dealer;
        next.to_match = bb;
        next.min_raise = self.big_blind;
        next.actions = 0;
        next.aggressor = None;
        next.hand = self.hand + 1;
        next.suggestion = self.big_blind * 2;
        next.winner = None;
        next.reveal = false;
        log::info!("hand #{} dealer {}", next.hand, NAMES[dealer]);
        next.note(Kind::System, format!("--- Hand #{} ---", next.hand));
        next.note(Kind::Info, format!("{} is the dealer.", NAMES[dealer]));
        next.note(
            Kind::Action,
            format!("{} posts small blind (${}).", NAMES[dealer], sb),
        );
        next.note(
            Kind::Action,
            format!("{} posts big blind (${}).", NAMES[blind], bb),
        );
        let dealt = next.seats[crate::HERO]
            .hole()
            .map(|hole| hole.pretty())
            .unwrap_or_default();
        next.note(
            Kind::Deal,
            format!("Dealt to {}: [{}]", NAMES[crate::HERO], dealt),
        );
        next
    }
}

/// Public state accessors.
impl Game {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn seats(&self) -> &[Seat; N] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn current(&self) -> Position {
        self.current
    }
    pub fn to_match(&self) -> Chips {
        self.to_match
    }
    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }
    pub fn actions(&self) -> usize {
        self.actions
    }
    pub fn aggressor(&self) -> Option<Position> {
        self.aggressor
    }
    pub fn hand(&self) -> usize {
        self.hand
    }
    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }
    /// Default raise size a front end should pre-fill.
    pub fn suggestion(&self) -> Chips {
        self.suggestion
    }
    pub fn log(&self) -> &[Entry] {
        &self.log
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    pub fn reveal(&self) -> bool {
        self.reveal
    }
    /// Chips on the table, in stacks and in the pot.
    pub fn total(&self) -> Chips {
        self.seats.iter().map(Seat::chips).sum::<Chips>() + self.pot
    }
    #[cfg(feature = "client")]
    pub fn json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Narrative.
impl Game {
    pub(super) fn note(&mut self, kind: Kind, text: impl Into<String>) {
        let entry = Entry::new(kind, text);
        log::debug!("{}", entry.text());
        self.log.push(entry);
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{} {}",
            format!("Hand #{}", self.hand).bold(),
            self.phase.to_string().cyan()
        )?;
        for (position, seat) in self.seats.iter().enumerate() {
            let button = match position == self.dealer {
                true => "D".yellow(),
                false => " ".normal(),
            };
            let cards = match (position, seat.hole()) {
                (crate::HERO, Some(hole)) => hole.pretty(),
                (_, Some(hole)) if self.reveal => hole.pretty(),
                (_, Some(_)) => String::from("?? ??"),
                (_, None) => String::new(),
            };
            writeln!(f, "{} {:<8} {} {}", button, NAMES[position], seat, cards)?;
        }
        writeln!(f, "Pot   {}", format!("${}", self.pot).green())?;
        writeln!(f, "Board {}", self.board.pretty())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HERO;
    use crate::VILLAIN;

    #[test]
    fn fresh_match_is_idle() {
        let game = Game::default();
        assert!(game.phase() == Phase::Idle);
        assert!(game.seat(HERO).chips() == 1000);
        assert!(game.seat(VILLAIN).chips() == 1000);
        assert!(game.log().len() == 2);
    }

    #[test]
    fn blinds_posted_on_first_hand() {
        let game = Game::default().deal(Deck::new());
        assert!(game.phase() == Phase::Preflop);
        assert!(game.hand() == 1);
        assert!(game.dealer() == HERO);
        assert!(game.seat(HERO).chips() == 990);
        assert!(game.seat(HERO).stake() == 10);
        assert!(game.seat(VILLAIN).chips() == 980);
        assert!(game.seat(VILLAIN).stake() == 20);
        assert!(game.pot() == 30);
        assert!(game.to_match() == 20);
        assert!(game.min_raise() == 20);
        assert!(game.current() == HERO);
        assert!(game.deck().len() == 48);
    }

    #[test]
    fn hole_cards_dealt_in_order() {
        let deck = Deck::try_from("Ah Kd 2c 3s 9h 9d 9c 9s").unwrap();
        let game = Game::default().deal(deck);
        assert!(game.seat(HERO).hole().unwrap().to_string() == "Ah Kd");
        assert!(game.seat(VILLAIN).hole().unwrap().to_string() == "2c 3s");
        assert!(game.deck().len() == 4);
    }

    #[test]
    fn deal_narrates_the_hand() {
        let deck = Deck::try_from("Ah Kd 2c 3s").unwrap();
        let game = Game::default().deal(deck);
        let lines = game
            .log()
            .iter()
            .map(|e| e.text().to_string())
            .collect::<Vec<_>>();
        assert!(lines[2] == "--- Hand #1 ---");
        assert!(lines[3] == "You is the dealer.");
        assert!(lines[4] == "You posts small blind ($10).");
        assert!(lines[5] == "Villain posts big blind ($20).");
        assert!(lines[6] == "Dealt to You: [A\u{2665} K\u{2666}]");
    }

    #[test]
    fn short_stack_posts_partial_blind() {
        let mut game = Game::default();
        game.seats[VILLAIN] = Seat::from(15);
        let game = game.deal(Deck::new());
        assert!(game.seat(VILLAIN).chips() == 0);
        assert!(game.seat(VILLAIN).stake() == 15);
        assert!(game.to_match() == 15);
        assert!(game.pot() == 25);
    }

    #[test]
    fn dealing_with_busted_seat_ends_match() {
        let mut game = Game::default();
        game.seats[HERO] = Seat::from(0);
        game.seats[VILLAIN] = Seat::from(2000);
        let over = game.deal(Deck::new());
        assert!(over.phase() == Phase::Idle);
        assert!(over.hand() == 0);
        assert!(over.seat(VILLAIN).chips() == 2000);
        assert!(over.log().last().unwrap().text() == "*** Villain wins the match! ***");
    }
}
