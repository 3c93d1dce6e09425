use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_types::SessionUser;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded user view model.
pub const USER_KEY: &str = "user";

/// Values the previous front end wrote when it stringified a missing
/// value. Both read back as "nothing stored".
const UNDEFINED_SENTINELS: [&str; 2] = ["undefined", "\"undefined\""];

// ── Backend trait ───────────────────────────────────────────────────

/// String key-value storage behind the session store.
pub trait StorageBackend {
    /// Read the raw entry for `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str);
    /// Remove the entry for `key` if present.
    fn remove(&self, key: &str);
}

// ── Browser sessionStorage ──────────────────────────────────────────

/// Tab-scoped browser storage: `window.sessionStorage`.
///
/// A missing window or storage object (headless contexts, storage
/// disabled by policy) degrades to absent reads and no-op writes.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct WebStorage;

#[cfg(target_arch = "wasm32")]
impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("sessionStorage write failed for key '{}'", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ── In-memory backend ───────────────────────────────────────────────

/// In-memory backend used outside the browser and by tests.
///
/// Clones share the same backing map, so a handle kept by a test
/// observes exactly what the session layer writes.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ── Session store ───────────────────────────────────────────────────

/// Defensive reader/writer for the persisted session pair.
///
/// The `token` and `user` entries are only ever written together and
/// removed together. Reads tolerate the garbage the previous front end
/// left behind (literal "undefined" strings, truncated JSON) and heal
/// the store instead of failing.
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store scoped to the current browser tab; in-memory outside the
    /// browser.
    pub fn tab() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Box::new(WebStorage))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(Box::new(MemoryStorage::new()))
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        let value = self.backend.get(key)?;
        if UNDEFINED_SENTINELS.contains(&value.as_str()) {
            return None;
        }
        Some(value)
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// The stored user view model. A present but unparsable entry is
    /// removed and read as absent.
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("clearing unparsable stored user entry: {}", e);
                self.backend.remove(USER_KEY);
                None
            }
        }
    }

    /// Persist the session pair. This is the only write path; the two
    /// entries are never written separately.
    pub fn write_session(&self, token: &str, user: &SessionUser) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                // Never store a partial pair.
                tracing::warn!("user entry failed to serialize, session not stored: {}", e);
                return;
            }
        };
        self.backend.set(TOKEN_KEY, token);
        self.backend.set(USER_KEY, &json);
    }

    /// Remove both session entries. Idempotent.
    pub fn clear_session(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
