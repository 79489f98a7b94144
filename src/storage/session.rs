use std::sync::Arc;

use crate::config::SecureString;
use crate::state::session::AuthSession;
use crate::storage::kv::{read_json, write_json, KeyValueStore, StorageError, StorageKey};

/// Persists the authenticated session across restarts.
#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored session.
    ///
    /// A partially stored session (e.g. token without user id) counts as
    /// no session at all.
    pub fn load(&self) -> Result<Option<AuthSession>, StorageError> {
        let store = self.store.as_ref();
        let token: Option<String> = read_json(store, StorageKey::AccessToken)?;
        let phone: Option<String> = read_json(store, StorageKey::PhoneNumber)?;
        let user_id: Option<String> = read_json(store, StorageKey::UserId)?;

        match (token, phone, user_id) {
            (Some(token), Some(phone), Some(user_id)) if !token.is_empty() => {
                Ok(Some(AuthSession {
                    token: SecureString::new(token),
                    phone,
                    user_id,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Store `session`, token last.
    ///
    /// The previous token is removed first, so a save that fails halfway
    /// leaves no session rather than a new token paired with an old user.
    pub fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
        let store = self.store.as_ref();
        store.remove(StorageKey::AccessToken)?;
        write_json(store, StorageKey::PhoneNumber, &session.phone)?;
        write_json(store, StorageKey::UserId, &session.user_id)?;
        write_json(store, StorageKey::AccessToken, &session.token)?;
        tracing::debug!(phone = %session.phone, "Session persisted");
        Ok(())
    }

    /// Remove the session; the phone number is kept to prefill the next login.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(StorageKey::AccessToken)?;
        self.store.remove(StorageKey::UserId)?;
        Ok(())
    }

    /// Phone number of the last signed-in customer.
    pub fn last_phone(&self) -> Result<Option<String>, StorageError> {
        read_json(self.store.as_ref(), StorageKey::PhoneNumber)
    }
}
