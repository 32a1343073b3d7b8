use log::warn;

use crate::gateways::storage::KeyValueStorage;

const STORAGE_KEY_PREFIX: &str = "needsReviewLocations_";
const GUEST: &str = "guest";

fn storage_key(username: Option<&str>) -> String {
    format!("{STORAGE_KEY_PREFIX}{}", username.unwrap_or(GUEST))
}

/// Per-identity set of location ids marked as "needs review".
///
/// A fresh basket has no identity and drops every mutation until
/// [`initialize_for_user`] selects one and loads its persisted set.
/// The set survives restarts through a [`KeyValueStorage`]. Storage
/// failures never surface to the caller: reads fall back to the empty
/// set, writes keep the in-memory state, and a warning is logged.
///
/// [`initialize_for_user`]: Self::initialize_for_user
#[derive(Debug)]
pub struct ReviewBasket<S> {
    storage: S,
    state: Option<BasketState>,
}

#[derive(Debug)]
struct BasketState {
    username: Option<String>,
    location_ids: Vec<String>,
}

impl<S: KeyValueStorage> ReviewBasket<S> {
    /// Creates a basket with no identity selected.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: None,
        }
    }

    /// Replaces the in-memory set with the persisted set of the given
    /// identity. `None` selects the shared guest basket.
    pub fn initialize_for_user(&mut self, username: Option<&str>) {
        let username = username.map(ToOwned::to_owned);
        let location_ids = self.load(&storage_key(username.as_deref()));
        self.state = Some(BasketState {
            username,
            location_ids,
        });
    }

    /// Marks a location. Ids that are already marked are kept as they
    /// are, without touching the storage. Marks placed before an
    /// identity has been selected are dropped.
    pub fn mark(&mut self, location_id: &str) {
        let Some(state) = &mut self.state else {
            return;
        };
        if state.location_ids.iter().any(|id| id == location_id) {
            return;
        }
        state.location_ids.push(location_id.to_owned());
        self.persist();
    }

    /// Unmarks a location. The persisted set is rewritten even when the
    /// id was not marked.
    pub fn unmark(&mut self, location_id: &str) {
        let Some(state) = &mut self.state else {
            return;
        };
        state.location_ids.retain(|id| id != location_id);
        self.persist();
    }

    /// Empties the set and persists the empty set.
    pub fn clear_all(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };
        state.location_ids.clear();
        self.persist();
    }

    pub fn contains(&self, location_id: &str) -> bool {
        self.ids().iter().any(|id| id == location_id)
    }

    pub fn ids(&self) -> &[String] {
        match &self.state {
            Some(state) => &state.location_ids,
            None => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.ids().len()
    }

    fn load(&self, key: &str) -> Vec<String> {
        match self.storage.get(key) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!("Ignoring unreadable review basket {key}: {err}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to load review basket {key}: {err}");
                Vec::new()
            }
        }
    }

    fn persist(&self) {
        let Some(state) = &self.state else {
            return;
        };
        let key = storage_key(state.username.as_deref());
        // Serializing a list of strings does not fail.
        let json = serde_json::to_string(&state.location_ids).unwrap_or_default();
        if let Err(err) = self.storage.set(&key, &json) {
            warn!("Failed to persist review basket {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use anyhow::bail;

    use super::*;

    #[derive(Debug, Default, Clone)]
    struct MemStorage(Rc<RefCell<HashMap<String, String>>>);

    impl KeyValueStorage for MemStorage {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.0.borrow().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }
        fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().remove(key);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _: &str) -> anyhow::Result<Option<String>> {
            bail!("storage unavailable");
        }
        fn set(&self, _: &str, _: &str) -> anyhow::Result<()> {
            bail!("storage unavailable");
        }
        fn remove(&self, _: &str) -> anyhow::Result<()> {
            bail!("storage unavailable");
        }
    }

    #[test]
    fn marked_ids_survive_a_restart() {
        let storage = MemStorage::default();
        let mut basket = ReviewBasket::new(storage.clone());
        basket.initialize_for_user(Some("alice"));
        basket.mark("a");
        basket.mark("b");
        assert!(basket.contains("a"));

        let mut reloaded = ReviewBasket::new(storage);
        reloaded.initialize_for_user(Some("alice"));
        assert_eq!(reloaded.ids(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn baskets_are_isolated_per_identity() {
        let storage = MemStorage::default();
        let mut basket = ReviewBasket::new(storage);
        basket.initialize_for_user(Some("alice"));
        basket.mark("a");

        basket.initialize_for_user(Some("bob"));
        assert_eq!(basket.count(), 0);
        basket.mark("b");

        basket.initialize_for_user(Some("alice"));
        assert_eq!(basket.ids(), ["a".to_string()]);
        assert!(!basket.contains("b"));
    }

    #[test]
    fn guest_basket_uses_the_shared_key() {
        let storage = MemStorage::default();
        let mut basket = ReviewBasket::new(storage.clone());
        basket.initialize_for_user(None);
        basket.mark("a");
        assert_eq!(
            storage.0.borrow().get("needsReviewLocations_guest").unwrap(),
            r#"["a"]"#
        );
    }

    #[test]
    fn mutations_are_dropped_until_an_identity_is_selected() {
        let storage = MemStorage::default();
        storage
            .set("needsReviewLocations_guest", r#"["persisted"]"#)
            .unwrap();

        let mut basket = ReviewBasket::new(storage.clone());
        basket.mark("rogue");
        basket.unmark("persisted");
        basket.clear_all();
        assert_eq!(basket.count(), 0);
        assert!(!basket.contains("rogue"));
        assert_eq!(
            storage.0.borrow().get("needsReviewLocations_guest").unwrap(),
            r#"["persisted"]"#
        );

        basket.initialize_for_user(None);
        assert_eq!(basket.ids(), ["persisted".to_string()]);
    }

    #[test]
    fn marking_twice_stores_one_copy() {
        let storage = MemStorage::default();
        let mut basket = ReviewBasket::new(storage.clone());
        basket.initialize_for_user(Some("alice"));
        basket.mark("a");
        basket.mark("a");
        assert_eq!(basket.count(), 1);
        assert_eq!(
            storage.0.borrow().get("needsReviewLocations_alice").unwrap(),
            r#"["a"]"#
        );
    }

    #[test]
    fn unmark_removes_and_persists() {
        let storage = MemStorage::default();
        let mut basket = ReviewBasket::new(storage.clone());
        basket.initialize_for_user(Some("alice"));
        basket.mark("a");
        basket.mark("b");
        basket.unmark("a");
        assert!(!basket.contains("a"));
        assert_eq!(
            storage.0.borrow().get("needsReviewLocations_alice").unwrap(),
            r#"["b"]"#
        );
    }

    #[test]
    fn clear_all_persists_the_empty_set() {
        let storage = MemStorage::default();
        let mut basket = ReviewBasket::new(storage.clone());
        basket.initialize_for_user(Some("alice"));
        basket.mark("a");
        basket.clear_all();

        let mut reloaded = ReviewBasket::new(storage);
        reloaded.initialize_for_user(Some("alice"));
        assert_eq!(reloaded.count(), 0);
    }

    #[test]
    fn storage_failures_keep_the_in_memory_set() {
        let mut basket = ReviewBasket::new(BrokenStorage);
        basket.initialize_for_user(Some("alice"));
        basket.mark("a");
        assert!(basket.contains("a"));
        assert_eq!(basket.count(), 1);
    }

    #[test]
    fn unreadable_persisted_state_falls_back_to_empty() {
        let storage = MemStorage::default();
        storage
            .set("needsReviewLocations_alice", "{not json")
            .unwrap();
        let mut basket = ReviewBasket::new(storage);
        basket.initialize_for_user(Some("alice"));
        assert_eq!(basket.count(), 0);
    }
}
