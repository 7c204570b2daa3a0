use crate::Chips;

/// Match parameters.
///
/// Blinds are fixed for the whole match. `seed` pins the table's entropy
/// source so a match can be replayed exactly; without it the table seeds
/// itself from the thread RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack: crate::STACK,
            small_blind: crate::S_BLIND,
            big_blind: crate::B_BLIND,
            seed: None,
        }
    }
}

impl Config {
    /// Rejects stacks and blinds that cannot produce a playable hand.
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.small_blind <= 0 {
            anyhow::bail!("small blind must be positive, got {}", self.small_blind);
        }
        if self.big_blind < self.small_blind {
            anyhow::bail!(
                "big blind {} is smaller than small blind {}",
                self.big_blind,
                self.small_blind
            );
        }
        if self.stack <= 0 {
            anyhow::bail!("starting stack must be positive, got {}", self.stack);
        }
        Ok(self)
    }
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
