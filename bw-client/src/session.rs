use log::warn;

use bw_boundary::{Credentials, User, UserRole};
use bw_core::{gateways::storage::KeyValueStorage, review_basket::ReviewBasket};

use crate::{PublicApi, Result, UserApi};

const USER_STORAGE_KEY: &str = "user";

/// Client-side session state: the signed-in identity and the review
/// basket, both persisted through a [`KeyValueStorage`].
///
/// [`init`] restores whatever a previous run left in the storage, so
/// an identity survives restarts until [`logout`]. Storage failures
/// are logged and the session carries on in memory. Dropping the
/// session leaves the persisted state untouched.
///
/// [`init`]: Self::init
/// [`logout`]: Self::logout
#[derive(Debug)]
pub struct Session<S> {
    public_api: PublicApi,
    storage: S,
    basket: ReviewBasket<S>,
    user_api: Option<UserApi>,
}

impl<S: KeyValueStorage + Clone> Session<S> {
    pub fn init(public_api: PublicApi, storage: S) -> Self {
        let mut session = Self {
            public_api,
            basket: ReviewBasket::new(storage.clone()),
            storage,
            user_api: None,
        };
        session.restore_user();
        session
    }

    fn restore_user(&mut self) {
        let stored = match self.storage.get(USER_STORAGE_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("Failed to load the stored identity: {err}");
                None
            }
        };
        let user = stored.and_then(|json| match serde_json::from_str::<User>(&json) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Ignoring unreadable stored identity: {err}");
                None
            }
        });
        self.user_api = user.map(|user| UserApi::new(self.public_api.url().to_owned(), user));
        self.reinitialize_basket();
    }

    /// Signs in and persists the identity for the next run.
    pub fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let api = self.public_api.login(credentials)?;
        self.store_user(api.user());
        self.user_api = Some(api);
        self.reinitialize_basket();
        Ok(())
    }

    /// Drops the identity and switches back to the guest basket.
    pub fn logout(&mut self) {
        if let Err(err) = self.storage.remove(USER_STORAGE_KEY) {
            warn!("Failed to remove the stored identity: {err}");
        }
        self.user_api = None;
        self.reinitialize_basket();
    }

    fn store_user(&self, user: &User) {
        // Serializing the identity does not fail.
        let json = serde_json::to_string(user).unwrap_or_default();
        if let Err(err) = self.storage.set(USER_STORAGE_KEY, &json) {
            warn!("Failed to persist the identity: {err}");
        }
    }

    fn reinitialize_basket(&mut self) {
        let username = self.username().map(ToOwned::to_owned);
        self.basket.initialize_for_user(username.as_deref());
    }

    pub fn user(&self) -> Option<&User> {
        self.user_api.as_ref().map(UserApi::user)
    }

    pub fn username(&self) -> Option<&str> {
        self.user().map(|user| user.username.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.role == UserRole::Admin)
    }

    pub fn public_api(&self) -> &PublicApi {
        &self.public_api
    }

    /// The API surface of the signed-in user, `None` for guests.
    pub fn user_api(&self) -> Option<&UserApi> {
        self.user_api.as_ref()
    }

    pub fn basket(&self) -> &ReviewBasket<S> {
        &self.basket
    }

    pub fn basket_mut(&mut self) -> &mut ReviewBasket<S> {
        &mut self.basket
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

    #[derive(Debug, Clone)]
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

    fn public_api() -> PublicApi {
        // Never actually contacted in these tests.
        PublicApi::new("http://127.0.0.1:0".into())
    }

    fn store_admin(storage: &MemStorage) {
        storage
            .set("user", r#"{"username":"anna","role":"admin","name":"Anna"}"#)
            .unwrap();
    }

    #[test]
    fn a_stored_identity_is_restored_on_init() {
        let storage = MemStorage::default();
        store_admin(&storage);
        let session = Session::init(public_api(), storage);
        assert_eq!(session.username(), Some("anna"));
        assert!(session.is_admin());
        assert!(session.user_api().is_some());
    }

    #[test]
    fn init_without_a_stored_identity_is_anonymous() {
        let session = Session::init(public_api(), MemStorage::default());
        assert_eq!(session.username(), None);
        assert!(!session.is_admin());
        assert!(session.user_api().is_none());
    }

    #[test]
    fn an_unreadable_stored_identity_falls_back_to_anonymous() {
        let storage = MemStorage::default();
        storage.set("user", "{not json").unwrap();
        let session = Session::init(public_api(), storage);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn logout_removes_the_stored_identity() {
        let storage = MemStorage::default();
        store_admin(&storage);
        let mut session = Session::init(public_api(), storage.clone());
        session.logout();
        assert_eq!(session.user(), None);
        assert!(!storage.0.borrow().contains_key("user"));
    }

    #[test]
    fn the_basket_follows_the_identity() {
        let storage = MemStorage::default();
        store_admin(&storage);
        let mut session = Session::init(public_api(), storage.clone());
        session.basket_mut().mark("a");
        assert_eq!(session.basket().count(), 1);

        session.logout();
        // The guest basket is empty, Anna's marks stay persisted.
        assert_eq!(session.basket().count(), 0);
        assert!(storage
            .0
            .borrow()
            .contains_key("needsReviewLocations_anna"));
    }

    #[test]
    fn a_broken_storage_leaves_the_session_usable() {
        let mut session = Session::init(public_api(), BrokenStorage);
        assert_eq!(session.user(), None);
        session.logout();
        session.basket_mut().mark("a");
        assert_eq!(session.basket().count(), 1);
    }
}
