//! Reading the signed-in identity before any page data is fetched.

use dioxus::prelude::document;
use shared_types::{StoredIdentity, USERNAME_KEY, USER_TYPE_KEY};

/// Key-value store holding the identity written at login.
#[allow(async_fn_in_trait)]
pub trait IdentityStore {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`, reached through `document::eval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl IdentityStore for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let key = serde_json::to_string(key).ok()?;
        let script = format!("return window.localStorage.getItem({key});");
        match document::eval(&script).join::<Option<String>>().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = ?e, "localStorage read failed");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let (Ok(key), Ok(value)) = (serde_json::to_string(key), serde_json::to_string(value))
        else {
            return;
        };
        let script = format!("window.localStorage.setItem({key}, {value}); return true;");
        if let Err(e) = document::eval(&script).join::<bool>().await {
            tracing::warn!(error = ?e, "localStorage write failed");
        }
    }
}

/// In-process store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (k, v) in entries {
            store.values.borrow_mut().insert(k.to_string(), v.to_string());
        }
        store
    }
}

#[cfg(test)]
impl IdentityStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Result of the bootstrap step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// Send the visitor to the login page; nothing else may run.
    Redirect,
    Ready(StoredIdentity),
}

async fn stored_identity(store: &impl IdentityStore) -> Option<StoredIdentity> {
    let role = store.get(USER_TYPE_KEY).await.filter(|v| !v.is_empty())?;
    let username = store.get(USERNAME_KEY).await.filter(|v| !v.is_empty())?;
    Some(StoredIdentity { username, role })
}

/// Labour-only pages: both keys present and the role is `labour`.
pub async fn bootstrap(store: &impl IdentityStore) -> Bootstrap {
    match stored_identity(store).await {
        Some(identity) if identity.is_labour() => Bootstrap::Ready(identity),
        _ => Bootstrap::Redirect,
    }
}

/// Pages open to any signed-in role: both keys present.
pub async fn require_identity(store: &impl IdentityStore) -> Bootstrap {
    match stored_identity(store).await {
        Some(identity) => Bootstrap::Ready(identity),
        None => Bootstrap::Redirect,
    }
}

/// Persist the identity returned by a successful login.
pub async fn remember(store: &impl IdentityStore, username: &str, role: &str) {
    store.set(USERNAME_KEY, username).await;
    store.set(USER_TYPE_KEY, role).await;
}
