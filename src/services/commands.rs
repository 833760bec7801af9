use crate::models::errors::GameResult;

/// A single player command read from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press the light at this 0-based index. May be out of range.
    Press(isize),
    NewGame,
    Help,
    Quit,
}

/// Parse one console line. Lights are numbered from 1 for the player;
/// anything that is neither a known word nor a number is a parse error.
pub fn parse_command(input: &str) -> GameResult<Command> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" | "h" | "help" | "?" => Ok(Command::Help),
        "n" | "new" => Ok(Command::NewGame),
        "q" | "quit" => Ok(Command::Quit),
        _ => {
            let number: isize = input.parse()?;
            Ok(Command::Press(number.saturating_sub(1)))
        }
    }
}
