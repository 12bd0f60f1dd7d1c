//! Session Model
//!
//! A per-client key/value map carried in a signed cookie and re-read on
//! every request. The only key the application interprets is
//! [`USERNAME_KEY`]: present means authenticated.

use serde_json::{Map, Value};

/// Session key holding the authenticated user name
pub const USERNAME_KEY: &str = "username";

/// Authentication state derived from a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated(String),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            AuthState::Authenticated(name) => Some(name),
            AuthState::Anonymous => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    values: Map<String, Value>,
    is_new: bool,
    save_requested: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session for a client that sent no cookie
    pub fn new() -> Self {
        Self {
            values: Map::new(),
            is_new: true,
            save_requested: false,
        }
    }

    /// Session decoded from an existing cookie
    pub fn from_values(values: Map<String, Value>) -> Self {
        Self {
            values,
            is_new: false,
            save_requested: false,
        }
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Request that the session be written back to the client
    pub fn save(&mut self) {
        self.save_requested = true;
    }

    pub fn needs_save(&self) -> bool {
        self.save_requested
    }

    /// True when the client sent no session cookie
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Authenticated user name, if any
    ///
    /// A non-string value under the key is not an identity.
    pub fn username(&self) -> Option<&str> {
        self.get(USERNAME_KEY).and_then(Value::as_str)
    }

    pub fn auth_state(&self) -> AuthState {
        match self.username() {
            Some(name) => AuthState::Authenticated(name.to_string()),
            None => AuthState::Anonymous,
        }
    }

    /// Anonymous -> Authenticated
    pub fn sign_in(&mut self, username: &str) {
        self.set(USERNAME_KEY, username);
        self.save();
    }

    /// Any state -> Anonymous
    ///
    /// Returns whether the session was authenticated before.
    pub fn sign_out(&mut self) -> bool {
        let was_authenticated = self.remove(USERNAME_KEY).is_some();
        self.save();
        was_authenticated
    }
}
