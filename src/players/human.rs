use super::player::Player;
use crate::Chips;
use crate::HERO;
use crate::gameplay::Action;
use crate::gameplay::Game;
use dialoguer::Input;
use dialoguer::Select;
use rand::RngCore;

/// The person at the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, game: &Game, _: &mut dyn RngCore) -> Action {
        match Self::prompt(game) {
            Ok(action) => action,
            Err(e) => {
                log::warn!("prompt failed ({}), playing passively", e);
                Self::passive(game)
            }
        }
    }
}

impl Human {
    /// Asks for one of the currently legal actions.
    pub fn prompt(game: &Game) -> anyhow::Result<Action> {
        let actions = game.legal();
        if actions.is_empty() {
            anyhow::bail!("no action is open to {}", crate::NAMES[HERO]);
        }
        let labels = actions
            .iter()
            .map(|a| Self::describe(a, game))
            .collect::<Vec<_>>();
        let choice = Self::selection(&labels, game)?;
        Self::resolve(&actions[choice], game)
    }
    fn describe(action: &Action, game: &Game) -> String {
        match action {
            Action::Fold => String::from("Fold"),
            Action::Check => String::from("Check"),
            Action::Call => format!("Call ${}", game.to_call()),
            Action::Raise(_) => format!(
                "Raise [${}-${}]",
                game.min_raise_total(),
                game.max_raise_total()
            ),
            Action::Shove => format!("All-in ${}", game.seat(HERO).chips()),
        }
    }
    fn selection(labels: &[String], game: &Game) -> anyhow::Result<usize> {
        Ok(Select::new()
            .with_prompt(format!("{}", game))
            .report(false)
            .items(labels)
            .default(0)
            .interact()?)
    }
    fn resolve(action: &Action, game: &Game) -> anyhow::Result<Action> {
        match action {
            Action::Raise(_) => Self::sizing(game),
            action => Ok(*action),
        }
    }
    fn sizing(game: &Game) -> anyhow::Result<Action> {
        let min = game.min_raise_total();
        let max = game.max_raise_total();
        let hint = game.suggestion().max(min).min(max);
        let bet = Input::<String>::new()
            .with_prompt(format!("Raise to [{}-{}]", min, max))
            .default(hint.to_string())
            .validate_with(|i: &String| -> Result<(), String> {
                let input = i
                    .trim()
                    .parse::<Chips>()
                    .map_err(|_| String::from("Enter a positive integer"))?;
                if input < min {
                    return Err(format!("Minimum raise is {}", min));
                }
                if input > max {
                    return Err(format!("Maximum raise is {}", max));
                }
                Ok(())
            })
            .report(false)
            .interact_text()?
            .trim()
            .parse::<Chips>()?;
        match bet == max {
            true => Ok(Action::Shove),
            false => Ok(Action::Raise(bet)),
        }
    }
    fn passive(game: &Game) -> Action {
        match game.is_allowed(&Action::Check) {
            true => Action::Check,
            false => Action::Fold,
        }
    }
}
