use craps_table::{BetCategory, Chips};
use thiserror::Error;

/// A parsed line of table input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bet { category: BetCategory, amount: Chips },
    Remove(BetCategory),
    Clear,
    TakeDown,
    Roll,
    Status,
    History,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Command needs a bet category.
    #[error("'{0}' needs a bet (e.g., '{0} place6'). Bets: {tokens}", tokens = BET_TOKENS)]
    MissingCategory(&'static str),
    /// Unknown bet category token.
    #[error("Unknown bet '{0}'. Bets: {tokens}", tokens = BET_TOKENS)]
    InvalidCategory(String),
    /// Bet command missing an amount.
    #[error("Bet needs an amount (e.g., 'bet pass 10')")]
    MissingAmount,
    /// Amount isn't a positive whole number.
    #[error("Invalid amount '{0}'. Must be a positive number (e.g., 'bet field 5')")]
    InvalidAmount(String),
    /// Unrecognized command.
    #[error("Unrecognized command '{0}'. Type 'help' to see available commands")]
    UnrecognizedCommand(String),
}

pub const BET_TOKENS: &str =
    "pass, dontpass, field, any7, yo, snake, boxcars, acedeuce, place4-10, hard4-10";

/// Parse a command string into a [`Command`].
///
/// # Examples
///
/// ```
/// use craps_table::BetCategory;
/// use ct_client::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("roll"), Ok(Command::Roll));
/// assert_eq!(
///     parse_command("bet place6 12"),
///     Ok(Command::Bet { category: BetCategory::Place(6), amount: 12 })
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();

    // Single-word commands first
    match parts.as_slice() {
        ["clear"] => return Ok(Command::Clear),
        ["takedown" | "down"] => return Ok(Command::TakeDown),
        ["roll" | "r"] => return Ok(Command::Roll),
        ["status" | "s"] => return Ok(Command::Status),
        ["history" | "h"] => return Ok(Command::History),
        ["help" | "?"] => return Ok(Command::Help),
        ["quit" | "exit" | "q"] => return Ok(Command::Quit),
        _ => {}
    }

    match parts.first() {
        Some(&("bet" | "b")) => parse_bet_command(&parts),
        Some(&("remove" | "rm")) => parse_category(parts.get(1), "remove").map(Command::Remove),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse a bet command: "bet CATEGORY AMOUNT"
fn parse_bet_command(parts: &[&str]) -> Result<Command, ParseError> {
    let category = parse_category(parts.get(1), "bet")?;
    let value = parts.get(2).ok_or(ParseError::MissingAmount)?;
    let amount = value
        .parse::<Chips>()
        .ok()
        .filter(|amount| *amount > 0)
        .ok_or_else(|| ParseError::InvalidAmount(value.to_string()))?;
    Ok(Command::Bet { category, amount })
}

fn parse_category(token: Option<&&str>, command: &'static str) -> Result<BetCategory, ParseError> {
    let token = token.ok_or(ParseError::MissingCategory(command))?;
    token
        .parse()
        .map_err(|_| ParseError::InvalidCategory(token.to_string()))
}
