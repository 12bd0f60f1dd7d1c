//! Blog Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::infra::session_store::{CookieSessionStore, SessionStore};
use crate::infra::sqlite::SqliteGateway;
use crate::presentation::context::{BlogAppState, bind_request_context};
use crate::presentation::handlers;

/// Route paths, also used as redirect targets
pub mod routes {
    pub const HOME: &str = "/";
    pub const REGISTER: &str = "/register";
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    pub const ENTRY: &str = "/entry";
}

/// Create the Blog router with the signed-cookie session store
pub fn blog_router(gateway: SqliteGateway, config: BlogConfig) -> Router {
    let sessions = CookieSessionStore::new(&config);
    blog_router_generic(gateway, sessions)
}

/// Create a Blog router for any session store implementation
pub fn blog_router_generic<S>(gateway: SqliteGateway, sessions: S) -> Router
where
    S: SessionStore + Clone,
{
    let state = BlogAppState {
        sessions: Arc::new(sessions),
        gateway: Arc::new(gateway),
    };

    Router::new()
        .route(routes::HOME, get(handlers::index))
        .route(
            routes::REGISTER,
            get(handlers::register_page).post(handlers::register),
        )
        .route(routes::LOGIN, get(handlers::login_page).post(handlers::login))
        .route(routes::LOGOUT, get(handlers::logout_page).post(handlers::logout))
        .route(
            routes::ENTRY,
            get(handlers::list_entries).post(handlers::create_entry),
        )
        // route_layer: unmatched paths never open storage
        .route_layer(middleware::from_fn_with_state(
            state,
            bind_request_context::<S>,
        ))
}
