use std::collections::HashMap;

pub type EntityId = u32;

/// Anything that can be stored in a [`KeyedStore`]: a value identified by a unique integer id.
pub trait Entity {
    fn id(&self) -> EntityId;
}

/// Generic id-to-record container.
///
/// Holds at most one record per id. Records are replaced, never mutated in place.
#[derive(Debug)]
pub struct KeyedStore<T> {
    records: HashMap<EntityId, T>,
}

impl<T> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyedStore<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> KeyedStore<T> {
    /// Stores a record under its own id, overwriting any previous record with that id.
    pub fn insert(&mut self, record: T) {
        self.records.insert(record.id(), record);
    }

    /// Gets the record stored under `id`, if any.
    pub fn find_by_id(&self, id: EntityId) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    /// Iterates over all stored records in no particular order.
    /// Each call reflects the store as it is at that moment.
    pub fn all(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Debug, Clone, PartialEq)]
    struct Customer {
        id: EntityId,
        name: String,
    }

    impl Customer {
        fn new(id: EntityId, name: &str) -> Self {
            Self {
                id,
                name: name.to_string(),
            }
        }
    }

    impl Entity for Customer {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = KeyedStore::<Customer>::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.find_by_id(1).is_none());
        assert_eq!(store.all().count(), 0);
    }

    #[test]
    fn test_store_and_find_by_id() {
        let mut store = KeyedStore::new();
        store.insert(Customer::new(7, "Zed"));

        assert_eq!(store.find_by_id(7).map(|c| c.name.as_str()), Some("Zed"));
        assert!(store.find_by_id(99).is_none());
        assert!(store.contains(7));
        assert!(!store.contains(99));
    }

    #[test]
    fn test_insert_overwrites_existing_id() {
        let mut store = KeyedStore::new();
        store.insert(Customer::new(1, "Ava"));
        store.insert(Customer::new(1, "Ben"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(1), Some(&Customer::new(1, "Ben")));
    }

    #[test]
    fn test_all_reflects_current_state() {
        let mut store = KeyedStore::new();
        store.insert(Customer::new(1, "Ava"));
        assert_eq!(store.all().count(), 1);

        store.insert(Customer::new(2, "Ben"));
        let mut names: Vec<_> = store.all().map(|c| c.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["Ava", "Ben"]);
    }

    proptest! {
        #[test]
        fn find_by_id_returns_latest_insert(
            inserts in prop::collection::vec((0u32..20, "[a-z]{1,8}"), 0..50),
            probe in 0u32..40,
        ) {
            let mut store = KeyedStore::new();
            let mut expected = BTreeMap::new();
            for (id, name) in &inserts {
                store.insert(Customer::new(*id, name));
                expected.insert(*id, name.clone());
            }

            for (id, name) in &expected {
                prop_assert_eq!(store.find_by_id(*id).map(|c| &c.name), Some(name));
            }
            prop_assert_eq!(store.find_by_id(probe).is_some(), expected.contains_key(&probe));
            prop_assert_eq!(store.len(), expected.len());
        }

        #[test]
        fn all_is_idempotent(ids in prop::collection::vec(0u32..100, 0..30)) {
            let mut store = KeyedStore::new();
            for id in &ids {
                store.insert(Customer::new(*id, "x"));
            }

            let first: BTreeSet<_> = store.all().map(|c| c.id).collect();
            let second: BTreeSet<_> = store.all().map(|c| c.id).collect();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, ids.into_iter().collect::<BTreeSet<_>>());
        }
    }
}
