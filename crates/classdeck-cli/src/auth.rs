//! Keychain-backed session persistence for the CLI.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(not(test))]
use keyring::Entry;

use classdeck_core::auth::{AuthSession, TokenStore};
use classdeck_core::{Error, Result};

#[cfg(not(test))]
const KEYRING_SERVICE_NAME: &str = "classdeck-cli";

/// One keychain entry per CLI profile
#[derive(Clone)]
pub struct KeyringTokenStore {
    username: String,
}

impl KeyringTokenStore {
    #[must_use]
    pub fn new(profile_name: &str) -> Self {
        Self {
            username: format!("session:{profile_name}"),
        }
    }

    #[cfg(test)]
    fn test_store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    #[cfg(not(test))]
    fn entry(&self) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE_NAME, &self.username)
            .map_err(|error| Error::Store(error.to_string()))
    }
}

impl TokenStore for KeyringTokenStore {
    #[cfg(not(test))]
    fn load(&self) -> Result<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::Store(error.to_string())),
        }
    }

    #[cfg(test)]
    fn load(&self) -> Result<Option<AuthSession>> {
        let store = Self::test_store();
        let guard = store
            .lock()
            .map_err(|error| Error::Store(error.to_string()))?;
        if let Some(raw) = guard.get(&self.username) {
            Ok(Some(serde_json::from_str(raw)?))
        } else {
            Ok(None)
        }
    }

    #[cfg(not(test))]
    fn save(&self, session: &AuthSession) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&raw)
            .map_err(|error| Error::Store(error.to_string()))?;
        Ok(())
    }

    #[cfg(test)]
    fn save(&self, session: &AuthSession) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        let store = Self::test_store();
        let mut guard = store
            .lock()
            .map_err(|error| Error::Store(error.to_string()))?;
        guard.insert(self.username.clone(), raw);
        Ok(())
    }

    #[cfg(not(test))]
    fn clear(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::Store(error.to_string())),
        }
    }

    #[cfg(test)]
    fn clear(&self) -> Result<()> {
        let store = Self::test_store();
        let mut guard = store
            .lock()
            .map_err(|error| Error::Store(error.to_string()))?;
        guard.remove(&self.username);
        Ok(())
    }
}
