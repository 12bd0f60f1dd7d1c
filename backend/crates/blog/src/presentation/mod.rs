//! Presentation Layer
//!
//! Request context binder, HTTP handlers, DTOs, view and router.

pub mod context;
pub mod dto;
pub mod handlers;
pub mod router;
pub mod view;

pub use context::{BlogAppState, RequestContext, bind_request_context};
pub use router::{blog_router, blog_router_generic, routes};
