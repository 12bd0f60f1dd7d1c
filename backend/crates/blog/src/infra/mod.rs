//! Infrastructure Layer
//!
//! SQLite storage gateway and the signed-cookie session store.

pub mod session_store;
pub mod sqlite;

pub use session_store::{CookieSessionStore, SessionError, SessionStore};
pub use sqlite::{SqliteGateway, SqliteStorage};
