//! Session ledger error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger errors
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum LedgerError {
    /// Roll already recorded
    #[error("roll {0} is already in the ledger")]
    DuplicateRoll(u64),

    /// Roll skipped ahead of the ledger
    #[error("expected roll {expected}, got roll {got}")]
    OutOfOrder { expected: u64, got: u64 },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
