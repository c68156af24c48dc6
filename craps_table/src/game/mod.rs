//! Craps engine: bet book, table state machine, payouts and settlement.
//!
//! Everything in here is synchronous and free of I/O. The only source of
//! randomness is whatever [`dice::RollSource`] the host passes in.

pub mod bet_book;
pub mod constants;
pub mod dice;
pub mod entities;
pub mod errors;
pub mod payouts;
pub mod settlement;
pub mod state_machine;

pub use bet_book::{BetBook, BetEntry};
pub use dice::{DiceSource, RollSource, ScriptedDice, SeededDice, ThreadDice};
pub use entities::{BetCategory, BetResult, Chips, ParseCategoryError, Phase, RollOutcome};
pub use errors::{BetError, RollError};
pub use payouts::{Odds, PayoutTable, PropOdds, ZeroDenominator};
pub use settlement::{CategoryOutcome, Settlement, next_point, settle};
pub use state_machine::TableStateMachine;
