//! Entity Module

pub mod entry;
pub mod user;

pub use entry::{Entry, NewEntry};
pub use user::{NewUser, User};
