//! Route definitions for applications.
//!
//! Mounted at `/applications` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::handlers::applications;
use crate::state::AppState;

/// Application routes.
///
/// ```text
/// POST   /             -> submit_application (panics answer with a failure payload)
/// GET    /             -> list_applications
/// GET    /dashboard    -> get_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(applications::submit_application)
                .layer(CatchPanicLayer::custom(applications::submission_panic))
                .get(applications::list_applications),
        )
        .route("/dashboard", get(applications::get_dashboard))
}
