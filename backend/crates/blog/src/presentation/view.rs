//! View
//!
//! Markup is produced outside this service. A page is the template
//! identifier plus the data to fill it with, sent as JSON.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Index,
    Register,
    Login,
    Logout,
    Entries,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Index => "index.html",
            Template::Register => "register.html",
            Template::Login => "login.html",
            Template::Logout => "logout.html",
            Template::Entries => "entries.html",
        }
    }
}

#[derive(Serialize)]
struct RenderedPage<T> {
    template: &'static str,
    data: T,
}

pub fn render<T: Serialize>(template: Template, data: T) -> Response {
    Json(RenderedPage {
        template: template.name(),
        data,
    })
    .into_response()
}

/// 302 Found: bounce back to a form
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// 303 See Other: continue after a state change
pub fn see_other(location: &'static str) -> Response {
    Redirect::to(location).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_statuses() {
        let response = found("/register");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/register");

        let response = see_other("/");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_render_wraps_template_and_data() {
        let response = render(Template::Login, serde_json::json!({ "k": 1 }));
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["template"], "login.html");
        assert_eq!(value["data"]["k"], 1);
    }
}
