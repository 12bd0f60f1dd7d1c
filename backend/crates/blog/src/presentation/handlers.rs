//! HTTP Handlers
//!
//! Every handler runs behind [`bind_request_context`](super::context::bind_request_context).
//! Recoverable errors become redirects here; everything else propagates
//! and renders as a 5xx.

use axum::Form;
use axum::response::Response;

use crate::application::{
    CreateEntryUseCase, ListEntriesUseCase, LoginUseCase, RegisterUseCase, sign_out,
};
use crate::error::{BlogError, BlogResult};
use crate::presentation::context::RequestContext;
use crate::presentation::dto::{CredentialsForm, EntriesPage, EntryForm, EntryView, IndexPage};
use crate::presentation::router::routes;
use crate::presentation::view::{Template, found, render, see_other};

/// GET /
pub async fn index(ctx: RequestContext) -> Response {
    let session = ctx.session().await;
    render(
        Template::Index,
        IndexPage {
            username: session.username().map(str::to_string),
        },
    )
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page() -> Response {
    render(Template::Register, ())
}

/// POST /register
pub async fn register(
    ctx: RequestContext,
    Form(form): Form<CredentialsForm>,
) -> BlogResult<Response> {
    let use_case = RegisterUseCase::new(ctx.storage());
    let mut session = ctx.session().await;

    match use_case.execute(form.into(), &mut session).await {
        Ok(_) => Ok(see_other(routes::HOME)),
        Err(e @ (BlogError::EmptyField(_) | BlogError::UserNameTaken)) => {
            e.log();
            Ok(found(routes::REGISTER))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page() -> Response {
    render(Template::Login, ())
}

/// POST /login
pub async fn login(
    ctx: RequestContext,
    Form(form): Form<CredentialsForm>,
) -> BlogResult<Response> {
    let use_case = LoginUseCase::new(ctx.storage());
    let mut session = ctx.session().await;

    match use_case.execute(form.into(), &mut session).await {
        Ok(_) => Ok(see_other(routes::HOME)),
        Err(e @ BlogError::EmptyField(_)) => {
            e.log();
            Ok(found(routes::LOGIN))
        }
        Err(e @ BlogError::InvalidCredentials) => {
            e.log();
            Ok(see_other(routes::LOGIN))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout_page() -> Response {
    render(Template::Logout, ())
}

/// POST /logout
pub async fn logout(ctx: RequestContext) -> Response {
    let mut session = ctx.session().await;
    sign_out(&mut session);
    see_other(routes::HOME)
}

// ============================================================================
// Entries
// ============================================================================

/// GET /entry
pub async fn list_entries(ctx: RequestContext) -> BlogResult<Response> {
    let storage = ctx.storage();
    let use_case = ListEntriesUseCase::new(storage.clone(), storage);
    let session = ctx.session().await;

    match use_case.execute(&session).await {
        Ok(entries) => Ok(render(
            Template::Entries,
            EntriesPage {
                entries: entries.into_iter().map(EntryView::from).collect(),
            },
        )),
        Err(e @ BlogError::NotAuthenticated) => {
            e.log();
            Ok(see_other(routes::LOGIN))
        }
        Err(e) => Err(e),
    }
}

/// POST /entry
pub async fn create_entry(
    ctx: RequestContext,
    Form(form): Form<EntryForm>,
) -> BlogResult<Response> {
    let storage = ctx.storage();
    let use_case = CreateEntryUseCase::new(storage.clone(), storage);
    let session = ctx.session().await;

    match use_case.execute(form.into(), &session).await {
        Ok(_) => Ok(see_other(routes::ENTRY)),
        Err(e @ BlogError::NotAuthenticated) => {
            e.log();
            Ok(see_other(routes::LOGIN))
        }
        Err(e @ BlogError::EmptyField(_)) => {
            e.log();
            Ok(found(routes::ENTRY))
        }
        Err(e) => Err(e),
    }
}
