//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use std::fmt;

/// Registered account
///
/// Created once by registration, never updated or deleted afterwards.
#[derive(Clone)]
pub struct User {
    /// Storage-assigned identifier
    pub id: UserId,
    /// Registration time
    pub created_at: DateTime<Utc>,
    /// Login handle (unique)
    pub name: String,
    /// Credential, stored and compared verbatim
    pub password: String,
}

impl User {
    /// Exact credential match
    pub fn matches(&self, name: &str, password: &str) -> bool {
        self.name == name && self.password == password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A user that has not been inserted yet
#[derive(Clone)]
pub struct NewUser {
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub password: String,
}

impl NewUser {
    /// Stamp a registration with the current time
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            created_at: Utc::now(),
            name: name.into(),
            password: password.into(),
        }
    }

    /// Attach the id the storage assigned on insert
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            created_at: self.created_at,
            name: self.name,
            password: self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_into_user_keeps_fields() {
        let before = Utc::now();
        let user = NewUser::new("alice", "pw").into_user(UserId::from_i64(3));
        assert_eq!(user.id.get(), 3);
        assert_eq!(user.name, "alice");
        assert_eq!(user.password, "pw");
        assert!(user.created_at >= before);
    }

    #[test]
    fn test_matches_is_exact() {
        let user = NewUser::new("alice", "pw").into_user(UserId::from_i64(1));
        assert!(user.matches("alice", "pw"));
        assert!(!user.matches("Alice", "pw"));
        assert!(!user.matches("alice", "pw "));
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = NewUser::new("alice", "hunter2").into_user(UserId::from_i64(1));
        let debug = format!("{:?}", user);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
