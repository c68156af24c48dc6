//! # Craps Table
//!
//! A craps settlement engine for a single player betting several categories
//! at once.
//!
//! Bets are staged into a bet book while the table is open. A roll locks the
//! book, draws dice from an injected [`game::RollSource`], and settles every
//! staged category against that one outcome. Winners and losers clear;
//! contract bets and bets waiting on a number stay on the layout for the
//! next roll.
//!
//! ## Architecture
//!
//! The table cycles through three phases:
//!
//! - **Betting**: bets may be added, removed or cleared
//! - **Rolling**: the book is locked and the dice are out
//! - **Resolving**: settlement is applied and the point updated
//!
//! ## Core Modules
//!
//! - [`game`]: Bet book, phases, payouts, settlement and dice sources
//! - [`table`]: Tables, the table manager and shooter rotation
//! - [`wallet`]: Session ledger kept by the host
//!
//! ## Example
//!
//! ```
//! use craps_table::{BetCategory, CrapsTable, ScriptedDice, TableConfig};
//!
//! let mut table = CrapsTable::with_balance(TableConfig::default(), 100).unwrap();
//! table.add(BetCategory::PassLine, 10).unwrap();
//! table.add(BetCategory::Field, 5).unwrap();
//!
//! // Come-out 6: the point is set and the field loses.
//! let report = table.begin_roll(&mut ScriptedDice::new([(2, 4)])).unwrap();
//! assert_eq!(table.point(), Some(6));
//! assert_eq!(report.net_change, -5);
//! assert_eq!(table.balance(), 95);
//! ```

/// Core game logic: bet book, state machine, payouts and settlement.
pub mod game;
pub use game::{
    BetBook, BetCategory, BetError, BetResult, CategoryOutcome, Chips, DiceSource, Phase,
    PropOdds, RollError, RollOutcome, RollSource, ScriptedDice, SeededDice, Settlement,
    ThreadDice,
    constants::{self, DEFAULT_MAX_BET, DEFAULT_MIN_BET, DEFAULT_STARTING_BALANCE},
    settle,
};

/// Tables, table manager and shooter rotation.
pub mod table;
pub use table::{CrapsTable, RollReport, ShooterRotation, TableConfig, TableManager};

/// Per-session running totals.
pub mod wallet;
pub use wallet::{LedgerEntry, LedgerError, SessionLedger};
