use super::card::Card;
use super::hole::Hole;
use rand::Rng;
use rand::seq::SliceRandom;

/// The undealt cards of one hand, in dealing order.
///
/// Cards come off the front. The deck only ever shrinks; a fresh one is
/// built for every hand, either shuffled from the table's entropy source
/// or stacked from an explicit card list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards, sorted.
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// A uniform permutation of all 52 cards.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// Next card off the top.
    pub fn flip(&mut self) -> Option<Card> {
        match self.0.is_empty() {
            true => None,
            false => Some(self.0.remove(0)),
        }
    }
    /// Discards the top card.
    pub fn burn(&mut self) {
        let _ = self.flip();
    }
    /// Up to `n` cards off the top, fewer if the deck runs dry.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.0.len());
        self.0.drain(..n).collect()
    }
    pub fn hole(&mut self) -> Option<Hole> {
        match self.deal(2).as_slice() {
            [a, b] => Some(Hole::from((*a, *b))),
            _ => None,
        }
    }
}

/// Stacked decks. The first card of the list is dealt first.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl TryFrom<&str> for Deck {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_is_complete() {
        let deck = Deck::new();
        assert!(deck.len() == 52);
        assert!(Hand::from(deck.cards()).size() == 52);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let deck = Deck::shuffled(rng);
        assert!(deck.len() == 52);
        assert!(Hand::from(deck.cards()).size() == 52);
        assert!(deck != Deck::new());
    }

    #[test]
    fn shuffle_is_reproducible() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(42));
        assert!(a == b);
    }

    #[test]
    fn deals_from_the_top() {
        let mut deck = Deck::try_from("Ah Kd 2c 3s 4h").unwrap();
        let hole = deck.hole().unwrap();
        assert!(hole.to_string() == "Ah Kd");
        deck.burn();
        assert!(deck.flip() == Card::try_from("3s").ok());
        assert!(deck.deal(3).len() == 1);
        assert!(deck.is_empty());
        assert!(deck.flip().is_none());
        assert!(deck.hole().is_none());
    }
}
