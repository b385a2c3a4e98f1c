//! Route registration and middleware composition.

pub mod books;
pub mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this are rejected before deserialization.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application router: operational routes at the root, the book
/// resource under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", book_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
