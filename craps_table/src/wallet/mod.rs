//! Session ledger for the host.
//!
//! A table only knows the net result of the roll it just settled. The
//! ledger keeps the running session total and a per-roll history.
//!
//! ## Example
//!
//! ```
//! use craps_table::game::{BetCategory, ScriptedDice};
//! use craps_table::table::{CrapsTable, TableConfig};
//! use craps_table::wallet::SessionLedger;
//!
//! let mut table = CrapsTable::new(TableConfig::default()).unwrap();
//! let mut ledger = SessionLedger::new();
//!
//! table.add(BetCategory::Field, 10).unwrap();
//! let report = table.begin_roll(&mut ScriptedDice::new([(6, 6)])).unwrap();
//! ledger.record(&report).unwrap();
//! assert_eq!(ledger.session_net(), 30);
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{LedgerError, LedgerResult};
pub use manager::SessionLedger;
pub use models::{EntryKind, LedgerEntry};
