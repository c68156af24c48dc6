//! Staging and roll error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{BetCategory, Chips, Phase};

/// Errors raised while staging, removing or clearing bets.
///
/// Every variant is raised before the book is touched, so a rejected
/// request never leaves a partial change behind.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum BetError {
    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Chips, required: Chips },
    #[error("bets are closed while the table is {phase}")]
    WrongPhase { phase: Phase },
    #[error("invalid bet category: {0}")]
    InvalidCategory(BetCategory),
    #[error("bet amount must be positive")]
    InvalidAmount,
    #[error("{category} needs at least {min} chips")]
    BelowTableMinimum { category: BetCategory, min: Chips },
    #[error("{category} is capped at {max} chips")]
    AboveTableMaximum { category: BetCategory, max: Chips },
    #[error("{0} can't be taken down once a point is established")]
    ContractBet(BetCategory),
    #[error("no {0} bet staged")]
    NotStaged(BetCategory),
}

impl BetError {
    /// Short message suitable for showing next to a rejected bet.
    pub fn client_message(&self) -> String {
        match self {
            BetError::InsufficientBalance { .. } => "Not enough chips for that bet".to_string(),
            BetError::WrongPhase { .. } => "Bets are closed until the dice settle".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Errors raised when a roll is requested or resolved.
///
/// Apart from `InvalidDice`, all of these are raised before any randomness
/// is drawn, so a rejected request never burns a roll.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RollError {
    #[error("no bets staged")]
    NothingStaged,
    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Chips, required: Chips },
    #[error("can't roll while the table is {phase}")]
    WrongPhase { phase: Phase },
    #[error("invalid dice: {d1} and {d2}")]
    InvalidDice { d1: u8, d2: u8 },
}

impl RollError {
    pub fn client_message(&self) -> String {
        match self {
            RollError::NothingStaged => "Place a bet before rolling".to_string(),
            RollError::InsufficientBalance { .. } => {
                "Staged bets exceed your balance; take some down".to_string()
            }
            _ => self.to_string(),
        }
    }
}
