//! Register Use Case
//!
//! Creates a new user account and signs the client in as that user.

use std::sync::Arc;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::session::Session;
use crate::error::{BlogError, BlogResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// On error nothing is written and the session is left untouched.
    pub async fn execute(&self, input: RegisterInput, session: &mut Session) -> BlogResult<User> {
        if input.user_name.is_empty() {
            return Err(BlogError::EmptyField("username"));
        }
        if input.password.is_empty() {
            return Err(BlogError::EmptyField("password"));
        }

        if self.user_repo.exists_by_name(&input.user_name).await? {
            return Err(BlogError::UserNameTaken);
        }

        let user = self
            .user_repo
            .create_user(&NewUser::new(input.user_name, input.password))
            .await?;

        session.sign_in(&user.name);

        tracing::info!(
            user_id = %user.id,
            user_name = %user.name,
            "User registered"
        );

        Ok(user)
    }
}
