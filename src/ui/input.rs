//! Keypress to command mapping.

use crate::core::action::{Action, FightStyle};

/// A parsed line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the session.
    Act(Action),
    /// Print the key reference.
    Help,
    /// Leave the program.
    Quit,
}

/// Key reference shown under the panel.
pub const HELP: &str =
    "[1-4] pick card  [b] barehanded  [w] weapon  [a] avoid room  [d] redeal  [r] restart  [q] quit";

/// Parse one line of input. Returns `None` for unknown keys.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let key = line.trim().to_ascii_lowercase();
    let command = match key.as_str() {
        "1" | "2" | "3" | "4" => {
            let index = key.parse::<usize>().ok()? - 1;
            Command::Act(Action::SelectCard(index))
        }
        "b" => Command::Act(Action::ChooseFightStyle(FightStyle::Barehanded)),
        "w" => Command::Act(Action::ChooseFightStyle(FightStyle::Weapon)),
        "a" => Command::Act(Action::AvoidRoom),
        "d" => Command::Act(Action::RedealRoom),
        "r" => Command::Act(Action::Restart),
        "h" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}
