pub mod action;
pub use action::*;

pub mod betting;

pub mod entry;
pub use entry::*;

pub mod game;
pub use game::*;

pub mod phase;
pub use phase::*;

pub mod query;

pub mod seat;
pub use seat::*;

pub mod showdown;

pub mod street;
