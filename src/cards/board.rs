use super::card::Card;
use super::hand::Hand;

/// Community cards in the order they were turned over. Never more than five.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn push(&mut self, card: Card) {
        debug_assert!(self.0.len() < 5);
        self.0.push(card);
    }
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        cards.into_iter().for_each(|c| self.push(c));
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn pretty(&self) -> String {
        self.0
            .iter()
            .map(Card::pretty)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.0.as_slice())
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        match cards.len() {
            0..=5 => Ok(Self(cards)),
            n => Err(format!("board holds at most 5 cards, got {}", n)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
