use crate::stores::{Entity, EntityId, KeyedStore};
use crate::Account;

/// An [`Account`] as held by the ledger, keyed by its account number.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: EntityId,
    pub account: Account,
}

impl Entity for LedgerEntry {
    fn id(&self) -> EntityId {
        self.id
    }
}

pub type AccountsStore = KeyedStore<LedgerEntry>;
