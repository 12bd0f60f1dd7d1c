//! In-memory repository doubles for use case tests

use std::sync::Mutex;

use kernel::id::{EntryId, UserId};

use crate::domain::entity::{
    entry::{Entry, NewEntry},
    user::{NewUser, User},
};
use crate::domain::repository::{EntryRepository, UserRepository};
use crate::error::{BlogError, BlogResult};

#[derive(Default)]
pub struct InMemoryRepository {
    users: Mutex<Vec<User>>,
    entries: Mutex<Vec<Entry>>,
}

impl InMemoryRepository {
    pub fn insert_user(&self, user: NewUser) -> User {
        let mut users = self.users.lock().unwrap();
        let user = user.into_user(UserId::from_i64(users.len() as i64 + 1));
        users.push(user.clone());
        user
    }

    pub fn insert_entry(&self, entry: NewEntry) -> Entry {
        let mut entries = self.entries.lock().unwrap();
        let entry = entry.into_entry(EntryId::from_i64(entries.len() as i64 + 1));
        entries.push(entry.clone());
        entry
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn entries_of(&self, user_id: UserId) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl UserRepository for InMemoryRepository {
    async fn create_user(&self, user: &NewUser) -> BlogResult<User> {
        if self.users.lock().unwrap().iter().any(|u| u.name == user.name) {
            return Err(BlogError::UserNameTaken);
        }
        Ok(self.insert_user(user.clone()))
    }

    async fn find_by_credentials(&self, name: &str, password: &str) -> BlogResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.matches(name, password))
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> BlogResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> BlogResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.name == name))
    }
}

impl EntryRepository for InMemoryRepository {
    async fn create_entry(&self, entry: &NewEntry) -> BlogResult<Entry> {
        Ok(self.insert_entry(entry.clone()))
    }

    async fn list_by_user(&self, user_id: UserId) -> BlogResult<Vec<Entry>> {
        Ok(self.entries_of(user_id))
    }
}

/// Every call fails as a broken connection would
pub struct FailingRepository;

fn broken() -> BlogError {
    BlogError::QueryFailed(sqlx::Error::PoolClosed)
}

impl UserRepository for FailingRepository {
    async fn create_user(&self, _user: &NewUser) -> BlogResult<User> {
        Err(broken())
    }

    async fn find_by_credentials(&self, _name: &str, _password: &str) -> BlogResult<Option<User>> {
        Err(broken())
    }

    async fn find_by_name(&self, _name: &str) -> BlogResult<Option<User>> {
        Err(broken())
    }

    async fn exists_by_name(&self, _name: &str) -> BlogResult<bool> {
        Err(broken())
    }
}

impl EntryRepository for FailingRepository {
    async fn create_entry(&self, _entry: &NewEntry) -> BlogResult<Entry> {
        Err(broken())
    }

    async fn list_by_user(&self, _user_id: UserId) -> BlogResult<Vec<Entry>> {
        Err(broken())
    }
}
