//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_entry;
pub mod identity;
pub mod list_entries;
pub mod login;
pub mod logout;
pub mod register;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use config::BlogConfig;
pub use create_entry::{CreateEntryInput, CreateEntryUseCase};
pub use identity::resolve_current_user;
pub use list_entries::ListEntriesUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use logout::sign_out;
pub use register::{RegisterInput, RegisterUseCase};
