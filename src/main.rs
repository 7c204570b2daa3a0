//! Terminal match against the computer opponent.
//!
//! Prints each new log line as it happens, prompts for the human's
//! decisions, and deals the next hand until one seat is busted.

use clap::Parser;
use dialoguer::Confirm;
use headsup::gameplay::Game;
use headsup::gameplay::Phase;
use headsup::gameroom::Table;
use headsup::players::Human;
use headsup::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = STACK, help = "Starting stack for both seats")]
    stack: Chips,
    #[arg(long, default_value_t = S_BLIND, help = "Small blind")]
    small_blind: Chips,
    #[arg(long, default_value_t = B_BLIND, help = "Big blind")]
    big_blind: Chips,
    #[arg(long, help = "Replay a match exactly from this seed")]
    seed: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            stack: args.stack,
            small_blind: args.small_blind,
            big_blind: args.big_blind,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse()).validate()?;
    log()?;
    let mut table = Table::seeded(config);
    let mut seen = 0;
    loop {
        seen = narrate(table.game(), seen);
        let game = table.game();
        if game.awaits(HERO) {
            let action = Human::prompt(game)?;
            if let Err(e) = table.act(action) {
                eprintln!("{}", e);
            }
        } else if game.is_over() && game.phase() != Phase::Idle {
            table.deal()?;
        } else if game.is_over() {
            match Confirm::new()
                .with_prompt("New match?")
                .default(true)
                .interact()?
            {
                true => {
                    table.restart();
                    seen = 0;
                }
                false => return Ok(()),
            }
        } else if game.phase() == Phase::Showdown {
            println!("{}", game);
            match Confirm::new()
                .with_prompt("Deal the next hand?")
                .default(true)
                .interact()?
            {
                true => table.deal().map(|_| ())?,
                false => return Ok(()),
            }
        } else {
            table.deal()?;
        }
    }
}

/// Prints log lines past `seen` and returns the new watermark.
fn narrate(game: &Game, seen: usize) -> usize {
    let log = game.log();
    for entry in log.iter().skip(seen) {
        println!("{}", entry);
    }
    log.len()
}
