//! Durable session state backed by browser localStorage.
//!
//! The stored token is the single source of truth for authentication:
//! nothing else in the app caches auth state across page loads.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const TOKEN_KEY: &str = "authToken";
pub const EMAIL_KEY: &str = "userEmail";
pub const NAME_KEY: &str = "userName";
pub const REMEMBER_KEY: &str = "rememberMe";

/// Key-value persistence for session entries. Implementations must treat a
/// missing backing store as a no-op rather than an error.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `SessionStore` over `window.localStorage`. Every call re-resolves the
/// storage object so a store handle can be created before the page is ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory `SessionStore` for tests and host-side rendering.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }
}

impl SessionStore for MemorySession {
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

/// Snapshot of the persisted session. Absent keys stay `None`; an empty
/// stored string is still a present value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub remember_me: bool,
}

impl Session {
    pub fn load(store: &dyn SessionStore) -> Self {
        Self {
            token: store.get(TOKEN_KEY),
            user_email: store.get(EMAIL_KEY),
            user_name: store.get(NAME_KEY),
            remember_me: store.get(REMEMBER_KEY).as_deref() == Some("true"),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Overwrites the login entries unconditionally; prior values are replaced.
pub fn persist_login(store: &dyn SessionStore, token: &str, email: &str, remember_me: bool) {
    store.set(TOKEN_KEY, token);
    store.set(EMAIL_KEY, email);
    store.set(REMEMBER_KEY, if remember_me { "true" } else { "false" });
}

/// Registration additionally records the display name entered on the form.
pub fn persist_registration(store: &dyn SessionStore, token: &str, email: &str, name: &str) {
    store.set(TOKEN_KEY, token);
    store.set(EMAIL_KEY, email);
    store.set(NAME_KEY, name);
}

pub fn clear(store: &dyn SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(EMAIL_KEY);
    store.remove(NAME_KEY);
    store.remove(REMEMBER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_empty_store_has_no_fields() {
        let store = MemorySession::new();
        let session = Session::load(&store);
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn persist_login_overwrites_previous_values() {
        let store = MemorySession::new();
        persist_login(&store, "t0", "old@example.com", true);
        persist_login(&store, "t1", "new@example.com", false);

        let session = Session::load(&store);
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(session.user_email.as_deref(), Some("new@example.com"));
        assert!(!session.remember_me);
    }

    #[test]
    fn remember_flag_round_trips_as_string() {
        let store = MemorySession::new();
        persist_login(&store, "t1", "a@example.com", true);
        assert_eq!(store.get(REMEMBER_KEY).as_deref(), Some("true"));
        assert!(Session::load(&store).remember_me);
    }

    #[test]
    fn empty_token_is_present_not_absent() {
        let store = MemorySession::new();
        store.set(TOKEN_KEY, "");
        let session = Session::load(&store);
        assert_eq!(session.token.as_deref(), Some(""));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_removes_every_session_key() {
        let store = MemorySession::new();
        persist_login(&store, "t1", "a@example.com", true);
        persist_registration(&store, "t1", "a@example.com", "Alice");

        clear(&store);

        let session = Session::load(&store);
        assert!(session.token.is_none());
        assert!(session.user_email.is_none());
        assert!(session.user_name.is_none());
        assert!(!session.remember_me);
    }
}
