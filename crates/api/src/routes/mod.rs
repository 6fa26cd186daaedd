pub mod applications;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /applications                                    submit (POST), list (GET)
/// /applications/dashboard                          dashboard view (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/applications", applications::router())
}
