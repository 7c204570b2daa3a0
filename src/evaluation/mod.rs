pub mod evaluator;
pub use evaluator::*;

pub mod judge;
pub use judge::*;

pub mod kicks;
pub use kicks::*;

pub mod ranking;
pub use ranking::*;

pub mod referee;
pub use referee::*;

pub mod strength;
pub use strength::*;
