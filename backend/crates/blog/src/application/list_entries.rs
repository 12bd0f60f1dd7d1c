//! List Entries Use Case

use std::sync::Arc;

use crate::application::identity::resolve_current_user;
use crate::domain::entity::entry::Entry;
use crate::domain::repository::{EntryRepository, UserRepository};
use crate::domain::session::Session;
use crate::error::BlogResult;

pub struct ListEntriesUseCase<U, E>
where
    U: UserRepository,
    E: EntryRepository,
{
    user_repo: Arc<U>,
    entry_repo: Arc<E>,
}

impl<U, E> ListEntriesUseCase<U, E>
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

    /// Entries owned by the session user, oldest first
    pub async fn execute(&self, session: &Session) -> BlogResult<Vec<Entry>> {
        let user = resolve_current_user(self.user_repo.as_ref(), session).await?;
        let entries = self.entry_repo.list_by_user(user.id).await?;

        tracing::debug!(user_id = %user.id, count = entries.len(), "Listed entries");

        Ok(entries)
    }
}
