//! Heads-up No-Limit Texas Hold'em.
//!
//! One human seat plays a computer opponent for the whole match. The
//! [`gameplay::Game`] value is the entire match state and every transition
//! returns a fresh copy of it; the [`gameroom::Table`] drives those
//! transitions, owns the single entropy source, and resolves the opponent's
//! turns before control returns to the caller.
pub mod cards;
pub mod config;
pub mod evaluation;
pub mod gameplay;
pub mod gameroom;
pub mod players;

#[cfg(test)]
mod tests;

pub use config::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pots, in chips.
pub type Chips = i32;
/// Seat index at the table (0 = human, 1 = opponent).
pub type Position = usize;
/// Uniform draws and pot-odds ratios.
pub type Probability = f32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 2;
/// The human seat.
pub const HERO: Position = 0;
/// The computer-controlled seat.
pub const VILLAIN: Position = 1;
/// Display names, indexed by seat.
pub const NAMES: [&str; N] = ["You", "Villain"];
/// Starting stack for both seats.
pub const STACK: Chips = 1000;
/// Small blind amount.
pub const S_BLIND: Chips = 10;
/// Big blind amount.
pub const B_BLIND: Chips = 20;
/// Upper bound on opponent decisions resolved for one external input.
/// Two per street is the most a hand can demand.
pub const MAX_CASCADE: usize = 16;

/// The seat across the table.
pub const fn other(position: Position) -> Position {
    (position + 1) % N
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so that prompts stay readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
