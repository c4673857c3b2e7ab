//! Cookie banner decision, kept in local storage across sessions.

use std::time::Duration;

use log::warn;
use web_sys::window;

use crate::config;
use crate::error::{js_error_text, PageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentState {
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => ConsentState::Unset,
            Some("true") => ConsentState::Accepted,
            Some("false") => ConsentState::Declined,
            Some(other) => {
                warn!("Unrecognised consent value {:?}, treating as unset", other);
                ConsentState::Unset
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsentState::Unset => "Not decided yet",
            ConsentState::Accepted => "Accepted",
            ConsentState::Declined => "Declined",
        }
    }
}

/// The decisions a user can actually record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accept,
    Decline,
}

impl ConsentChoice {
    fn stored_value(self) -> &'static str {
        match self {
            ConsentChoice::Accept => "true",
            ConsentChoice::Decline => "false",
        }
    }

    pub fn state(self) -> ConsentState {
        match self {
            ConsentChoice::Accept => ConsentState::Accepted,
            ConsentChoice::Decline => ConsentState::Declined,
        }
    }
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// `window.localStorage`.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, PageError> {
        window()
            .ok_or(PageError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| PageError::Storage(js_error_text(&e)))?
            .ok_or(PageError::StorageUnavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PageError::Storage(js_error_text(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PageError::Storage(js_error_text(&e)))
    }
}

pub struct ConsentStore<S: KeyValueStorage> {
    storage: S,
    key: &'static str,
}

impl ConsentStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> ConsentStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: config::CONSENT_STORAGE_KEY,
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Unreadable storage reads as `Unset`, which just shows the banner again.
    pub fn read(&self) -> ConsentState {
        match self.storage.get(self.key) {
            Ok(value) => ConsentState::from_stored(value.as_deref()),
            Err(e) => {
                warn!("Could not read consent: {}", e);
                ConsentState::Unset
            }
        }
    }

    pub fn write(&self, choice: ConsentChoice) -> Result<(), PageError> {
        self.storage.set(self.key, choice.stored_value())
    }

    /// Writes and logs on failure; for UI handlers that have nowhere to
    /// propagate to. Returns the state the page should show now.
    pub fn record(&self, choice: ConsentChoice) -> ConsentState {
        if let Err(e) = self.write(choice) {
            warn!("Could not persist consent ({:?}): {}", choice, e);
        }
        choice.state()
    }
}

/// The banner shows only for an undecided visitor, once the delay has passed.
pub fn banner_visible(state: ConsentState, since_mount: Duration) -> bool {
    state == ConsentState::Unset
        && since_mount >= Duration::from_millis(u64::from(config::CONSENT_BANNER_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory storage. Cloning the map simulates a reload of the same origin.
    #[derive(Default)]
    struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl MemoryStorage {
        /// Storage that refuses every write, like a full or disabled quota.
        fn read_only() -> Self {
            Self {
                items: RefCell::default(),
                read_only: true,
            }
        }

        fn reload(&self) -> Self {
            Self {
                items: RefCell::new(self.items.borrow().clone()),
                read_only: self.read_only,
            }
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, PageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
            if self.read_only {
                return Err(PageError::Storage("quota exceeded".to_string()));
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn two_seconds() -> Duration {
        Duration::from_secs(2)
    }

    #[test]
    fn fresh_storage_is_unset() {
        let store = ConsentStore::new(MemoryStorage::default());
        assert_eq!(store.read(), ConsentState::Unset);
    }

    #[test]
    fn stored_values_map_to_states() {
        assert_eq!(ConsentState::from_stored(None), ConsentState::Unset);
        assert_eq!(ConsentState::from_stored(Some("true")), ConsentState::Accepted);
        assert_eq!(ConsentState::from_stored(Some("false")), ConsentState::Declined);
        assert_eq!(ConsentState::from_stored(Some("yes please")), ConsentState::Unset);
    }

    #[test]
    fn accepted_survives_reload() {
        let store = ConsentStore::new(MemoryStorage::default());
        store.write(ConsentChoice::Accept).unwrap();

        let reloaded = ConsentStore::new(store.storage().reload());
        assert_eq!(reloaded.read(), ConsentState::Accepted);
    }

    #[test]
    fn write_is_idempotent() {
        let store = ConsentStore::new(MemoryStorage::default());
        store.write(ConsentChoice::Decline).unwrap();
        store.write(ConsentChoice::Decline).unwrap();
        assert_eq!(store.read(), ConsentState::Declined);
        assert_eq!(
            store.storage().get(config::CONSENT_STORAGE_KEY).unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn banner_needs_unset_and_delay() {
        assert!(!banner_visible(ConsentState::Unset, Duration::from_millis(1_999)));
        assert!(banner_visible(ConsentState::Unset, two_seconds()));
        assert!(!banner_visible(ConsentState::Accepted, two_seconds()));
        assert!(!banner_visible(ConsentState::Declined, Duration::from_secs(60)));
    }

    #[test]
    fn accept_all_scenario() {
        let store = ConsentStore::new(MemoryStorage::default());
        assert!(banner_visible(store.read(), two_seconds()));

        let shown = store.record(ConsentChoice::Accept);
        assert!(!banner_visible(shown, two_seconds()));
        assert_eq!(
            store.storage().get(config::CONSENT_STORAGE_KEY).unwrap().as_deref(),
            Some("true")
        );

        let reloaded = ConsentStore::new(store.storage().reload());
        assert_eq!(reloaded.read(), ConsentState::Accepted);
        assert!(!banner_visible(reloaded.read(), two_seconds()));
    }

    #[test]
    fn failed_write_hides_now_and_returns_next_load() {
        let store = ConsentStore::new(MemoryStorage::read_only());
        assert!(store.write(ConsentChoice::Accept).is_err());

        let shown = store.record(ConsentChoice::Accept);
        assert_eq!(shown, ConsentState::Accepted);

        let reloaded = ConsentStore::new(store.storage().reload());
        assert!(banner_visible(reloaded.read(), two_seconds()));
    }
}
