//! Table layer on top of the craps engine.
//!
//! This module implements:
//! - `CrapsTable`: one bankroll, one bet book and the phase/point state
//! - `TableManager`: many independent tables keyed by ID
//! - `ShooterRotation`: who holds the dice, passed on each seven-out
//! - Table configuration and validation
//!
//! ## Example
//!
//! ```
//! use craps_table::game::{BetCategory, ScriptedDice};
//! use craps_table::table::{CrapsTable, TableConfig};
//!
//! let mut table = CrapsTable::new(TableConfig::default()).unwrap();
//! table.add(BetCategory::PassLine, 10).unwrap();
//!
//! let report = table.begin_roll(&mut ScriptedDice::new([(3, 4)])).unwrap();
//! assert_eq!(report.net_change, 10);
//! assert_eq!(table.balance(), 1_010);
//! ```

pub mod config;
pub mod craps_table;
pub mod manager;
pub mod shooter;

pub use config::{ConfigError, TableConfig};
pub use craps_table::{CrapsTable, RollReport};
pub use manager::{TableId, TableManager, TableMetadata};
pub use shooter::{RotationError, ShooterName, ShooterRotation};
