//! Domain-specific errors for the ledger.
//!
//! Contains error variants for common failure cases like:
//! - Argument validation (negative opening balance, non-positive deposit)
//! - Account lookup errors (not found, already open)
//! - Incomplete operation rows (missing amount or owner)
//! - Balances that would overflow
//!
//! These errors represent business rule failures rather than
//! technical errors like I/O or parsing issues.

use crate::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value was out of range for the named argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("account {0} not found")]
    AccountNotFound(EntityId),
    #[error("account {0} is already open")]
    AccountAlreadyOpen(EntityId),
    #[error("operation requires an amount")]
    MissingAmount,
    #[error("operation requires an owner")]
    MissingOwner,
    #[error("withdrawal declined")]
    WithdrawalDeclined,
    /// The resulting balance would not fit in a `Decimal`.
    #[error("balance overflow")]
    BalanceOverflow,
}
