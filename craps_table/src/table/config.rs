//! Table configuration models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{
    constants::{DEFAULT_MAX_BET, DEFAULT_MIN_BET, DEFAULT_STARTING_BALANCE},
    entities::Chips,
    payouts::{PayoutTable, PropOdds},
};

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table name
    pub name: String,

    /// Smallest amount any single bet may total
    pub min_bet: Chips,

    /// Largest amount any single bet may total
    pub max_bet: Chips,

    /// Proposition payout schedule
    pub odds: PropOdds,

    /// Chips a player sits down with
    pub starting_balance: Chips,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "Main Table".to_string(),
            min_bet: DEFAULT_MIN_BET,
            max_bet: DEFAULT_MAX_BET,
            odds: PropOdds::Standard,
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl TableConfig {
    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid("name", "Must not be empty"));
        }

        if self.min_bet == 0 {
            return Err(ConfigError::invalid("min_bet", "Must be greater than 0"));
        }

        if self.max_bet < self.min_bet {
            return Err(ConfigError::invalid(
                "max_bet",
                format!("Must be at least the table minimum ({})", self.min_bet),
            ));
        }

        Ok(())
    }

    /// Payout schedule this table pays on.
    #[must_use]
    pub fn payout_table(&self) -> PayoutTable {
        PayoutTable::for_odds(self.odds)
    }
}
