//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, the session model, repository traits
//! - `application/` - Use cases (register, login, logout, entries)
//! - `infra/` - SQLite storage gateway and signed-cookie session store
//! - `presentation/` - Request context binder, handlers, DTOs, router
//!
//! ## Request pipeline
//! Every routed request gets exactly one [`Session`](domain::Session) and
//! one storage handle. The handle is opened by the context binder before
//! the handler runs and closed after it returns, whatever the outcome.
//!
//! ## Ownership
//! Entries are bound to the user resolved from the session of the request
//! that created them. Clients never supply the owner.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BlogConfig;
pub use error::{BlogError, BlogResult};
pub use infra::session_store::{CookieSessionStore, SessionStore};
pub use infra::sqlite::{SqliteGateway, SqliteStorage};
pub use presentation::router::{blog_router, blog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::session::*;
    pub use crate::presentation::dto::*;
}
