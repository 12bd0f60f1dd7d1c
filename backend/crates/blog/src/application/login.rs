//! Login Use Case
//!
//! Authenticates a user by exact name/password match.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::session::Session;
use crate::error::{BlogError, BlogResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// On error the session is left untouched.
    pub async fn execute(&self, input: LoginInput, session: &mut Session) -> BlogResult<User> {
        // Rejected only when both are empty; a single empty field falls
        // through to the credential lookup and fails there.
        if input.user_name.is_empty() && input.password.is_empty() {
            return Err(BlogError::EmptyField("username"));
        }

        let user = self
            .user_repo
            .find_by_credentials(&input.user_name, &input.password)
            .await?
            .ok_or(BlogError::InvalidCredentials)?;

        session.sign_in(&user.name);

        tracing::info!(
            user_id = %user.id,
            user_name = %user.name,
            "User logged in"
        );

        Ok(user)
    }
}
