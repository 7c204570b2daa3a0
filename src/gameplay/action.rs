use crate::Chips;
use colored::*;

/// A seat's betting decision.
///
/// `Raise` carries the target **total** stake for the street, not the
/// increment over the current bet. `Shove` commits everything behind.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
    Shove,
}

impl Action {
    /// Command name accepted by the table.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Raise(_) => "raise",
            Action::Shove => "allin",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise(total) => write!(f, "{}", format!("RAISE {}", total).green()),
            Action::Shove => write!(f, "{}", "SHOVE".magenta()),
        }
    }
}
