//! Create Entry Use Case
//!
//! The owner is always the session user; the input has no owner field.

use std::sync::Arc;

use crate::application::identity::resolve_current_user;
use crate::domain::entity::entry::{Entry, NewEntry};
use crate::domain::repository::{EntryRepository, UserRepository};
use crate::domain::session::Session;
use crate::error::{BlogError, BlogResult};

/// Create entry input
pub struct CreateEntryInput {
    pub title: String,
    pub body: String,
}

pub struct CreateEntryUseCase<U, E>
where
    U: UserRepository,
    E: EntryRepository,
{
    user_repo: Arc<U>,
    entry_repo: Arc<E>,
}

impl<U, E> CreateEntryUseCase<U, E>
where
    U: UserRepository,
    E: EntryRepository,
{
    pub fn new(user_repo: Arc<U>, entry_repo: Arc<E>) -> Self {
        Self {
            user_repo,
            entry_repo,
        }
    }

    pub async fn execute(&self, input: CreateEntryInput, session: &Session) -> BlogResult<Entry> {
        let user = resolve_current_user(self.user_repo.as_ref(), session).await?;

        // Either field alone is enough for an entry
        if input.title.is_empty() && input.body.is_empty() {
            return Err(BlogError::EmptyField("title"));
        }

        let entry = self
            .entry_repo
            .create_entry(&NewEntry::new(&user, input.title, input.body))
            .await?;

        tracing::info!(
            entry_id = %entry.id,
            user_id = %user.id,
            "Entry created"
        );

        Ok(entry)
    }
}
