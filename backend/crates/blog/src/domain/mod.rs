//! Domain Layer
//!
//! Contains entities, the session model, and repository traits.

pub mod entity;
pub mod repository;
pub mod session;

// Re-exports
pub use entity::{
    entry::{Entry, NewEntry},
    user::{NewUser, User},
};
pub use repository::{EntryRepository, UserRepository};
pub use session::{AuthState, Session};
