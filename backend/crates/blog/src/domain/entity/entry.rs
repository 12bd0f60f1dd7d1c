//! Entry Entity
//!
//! A short text post owned by exactly one user.

use chrono::{DateTime, Utc};
use kernel::id::{EntryId, UserId};

use super::user::User;

/// Stored entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub created_at: DateTime<Utc>,
    /// Owner, fixed at creation
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// An entry that has not been inserted yet
///
/// The owner can only come from a resolved [`User`], so a draft can never
/// carry a client-supplied owner id.
#[derive(Debug, Clone)]
pub struct NewEntry {
    created_at: DateTime<Utc>,
    user_id: UserId,
    title: String,
    body: String,
}

impl NewEntry {
    pub fn new(owner: &User, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            created_at: Utc::now(),
            user_id: owner.id,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Attach the id the storage assigned on insert
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            created_at: self.created_at,
            user_id: self.user_id,
            title: self.title,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::NewUser;

    #[test]
    fn test_new_entry_takes_owner_from_user() {
        let owner = NewUser::new("bob", "pw").into_user(UserId::from_i64(11));
        let draft = NewEntry::new(&owner, "title", "body");
        assert_eq!(draft.user_id(), owner.id);

        let entry = draft.into_entry(EntryId::from_i64(5));
        assert_eq!(entry.id.get(), 5);
        assert_eq!(entry.user_id.get(), 11);
        assert_eq!(entry.title, "title");
        assert_eq!(entry.body, "body");
    }
}
