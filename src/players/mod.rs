#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod player;
pub use player::*;

pub mod robot;
pub use robot::*;
