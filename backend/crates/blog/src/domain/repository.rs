//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{
    entry::{Entry, NewEntry},
    user::{NewUser, User},
};
use crate::error::BlogResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id
    ///
    /// A duplicate name fails with `BlogError::UserNameTaken`.
    async fn create_user(&self, user: &NewUser) -> BlogResult<User>;

    /// Find the user whose name and password both match exactly
    async fn find_by_credentials(&self, name: &str, password: &str) -> BlogResult<Option<User>>;

    /// Find user by name
    async fn find_by_name(&self, name: &str) -> BlogResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_name(&self, name: &str) -> BlogResult<bool>;
}

/// Entry repository trait
#[trait_variant::make(EntryRepository: Send)]
pub trait LocalEntryRepository {
    /// Insert an entry and return it with its assigned id
    async fn create_entry(&self, entry: &NewEntry) -> BlogResult<Entry>;

    /// All entries owned by a user, in insertion order
    async fn list_by_user(&self, user_id: UserId) -> BlogResult<Vec<Entry>>;
}
