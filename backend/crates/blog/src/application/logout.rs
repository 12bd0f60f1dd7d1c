//! Logout
//!
//! Drops the identity from the session. Safe to call when anonymous.

use crate::domain::session::Session;

pub fn sign_out(session: &mut Session) {
    let was_authenticated = session.sign_out();
    if was_authenticated {
        tracing::info!("User logged out");
    } else {
        tracing::debug!("Logout without identity");
    }
}
