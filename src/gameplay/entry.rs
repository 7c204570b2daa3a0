use colored::*;

/// What a log line is about, so a front end can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    System,
    Info,
    Action,
    Deal,
    Board,
    Win,
}

/// One line of the match narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    kind: Kind,
    text: String,
}

impl Entry {
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::System => write!(f, "{}", self.text.bold()),
            Kind::Info => write!(f, "{}", self.text.dimmed()),
            Kind::Action => write!(f, "{}", self.text),
            Kind::Deal => write!(f, "{}", self.text.cyan()),
            Kind::Board => write!(f, "{}", self.text.yellow()),
            Kind::Win => write!(f, "{}", self.text.green().bold()),
        }
    }
}
