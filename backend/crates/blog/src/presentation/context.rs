//! Request Context Binder
//!
//! Middleware that gives every routed request one session and one storage
//! handle, and releases the storage handle once the handler has returned.
//! Handlers receive both through the typed [`RequestContext`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::session::Session;
use crate::error::BlogError;
use crate::infra::session_store::SessionStore;
use crate::infra::sqlite::{SqliteGateway, SqliteStorage};

/// Shared state for the context binder
#[derive(Clone)]
pub struct BlogAppState<S>
where
    S: SessionStore + Clone,
{
    pub sessions: Arc<S>,
    pub gateway: Arc<SqliteGateway>,
}

/// Session and storage bound to one request
#[derive(Clone)]
pub struct RequestContext {
    session: Arc<Mutex<Session>>,
    storage: Arc<SqliteStorage>,
}

impl RequestContext {
    fn new(session: Session, storage: SqliteStorage) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            storage: Arc::new(storage),
        }
    }

    pub async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    pub fn storage(&self) -> Arc<SqliteStorage> {
        self.storage.clone()
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .ok_or_else(|| BlogError::Internal("request context not bound".to_string()))
    }
}

/// Bind session + storage, run the handler, then release and persist
pub async fn bind_request_context<S>(
    State(state): State<BlogAppState<S>>,
    mut req: Request,
    next: Next,
) -> Response
where
    S: SessionStore + Clone,
{
    let session = match state.sessions.load(req.headers()) {
        Ok(session) => session,
        Err(e) => {
            let clear = state.sessions.clear_cookie();
            let mut response = BlogError::from(e).into_response();
            // Drop the unreadable cookie so the next request starts fresh
            if let Ok(clear) = clear {
                response.headers_mut().append(header::SET_COOKIE, clear);
            }
            return response;
        }
    };

    let storage = match state.gateway.open().await {
        Ok(storage) => storage,
        Err(e) => return e.into_response(),
    };

    let context = RequestContext::new(session, storage);
    req.extensions_mut().insert(context.clone());

    let mut response = next.run(req).await;

    let RequestContext { session, storage } = context;
    release_storage(storage).await;

    let session = session.lock().await;
    if session.needs_save() || session.is_new() {
        match state.sessions.save(&session) {
            Ok(cookie) => {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            Err(e) => return BlogError::from(e).into_response(),
        }
    }

    response
}

async fn release_storage(storage: Arc<SqliteStorage>) {
    match Arc::try_unwrap(storage) {
        Ok(storage) => {
            if let Err(e) = storage.close().await {
                tracing::warn!(error = %e, "Failed to close storage handle");
            }
        }
        Err(shared) => {
            // Released when the last clone drops
            tracing::warn!(
                references = Arc::strong_count(&shared),
                "Storage handle still shared after request"
            );
        }
    }
}
