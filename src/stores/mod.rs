//! Storage layer for the ledger. Provides:
//! - A generic id-keyed container for any [`Entity`] ([`KeyedStore`])
//! - The ledger's account records ([`LedgerEntry`], [`AccountsStore`])
//!
//! Current implementation is optimized for synchronous, direct memory
//! access by a single owner.

mod accounts;
mod keyed;

pub use accounts::{AccountsStore, LedgerEntry};
pub use keyed::{Entity, EntityId, KeyedStore};
