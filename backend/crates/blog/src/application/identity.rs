//! Current user resolution shared by the entry use cases.

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::session::{AuthState, Session};
use crate::error::{BlogError, BlogResult};

/// Resolve the session identity to a stored user
///
/// An anonymous session, or a name with no user row behind it, is
/// `NotAuthenticated`.
pub async fn resolve_current_user<U>(user_repo: &U, session: &Session) -> BlogResult<User>
where
    U: UserRepository,
{
    let AuthState::Authenticated(name) = session.auth_state() else {
        return Err(BlogError::NotAuthenticated);
    };

    match user_repo.find_by_name(&name).await? {
        Some(user) => Ok(user),
        None => {
            tracing::warn!(user_name = %name, "Session names a user that does not exist");
            Err(BlogError::NotAuthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryRepository;
    use crate::domain::entity::user::NewUser;

    #[tokio::test]
    async fn test_anonymous_is_not_authenticated() {
        let repo = InMemoryRepository::default();
        let err = resolve_current_user(&repo, &Session::new())
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_authenticated() {
        let repo = InMemoryRepository::default();
        let mut session = Session::new();
        session.sign_in("ghost");
        let err = resolve_current_user(&repo, &session).await.unwrap_err();
        assert!(matches!(err, BlogError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_resolves_stored_user() {
        let repo = InMemoryRepository::default();
        let stored = repo.insert_user(NewUser::new("alice", "pw"));
        let mut session = Session::new();
        session.sign_in("alice");

        let user = resolve_current_user(&repo, &session).await.unwrap();
        assert_eq!(user.id, stored.id);
    }
}
