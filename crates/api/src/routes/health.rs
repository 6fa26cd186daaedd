//! Liveness and store reachability.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use recruit_core::error::StoreError;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreHealth {
    Up,
    Unreachable,
    Failing,
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
    /// Whether the applications listing is currently served from memory.
    pub listing_cached: bool,
}

/// GET /health. Answers 503 while the store is not usable.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = match state.store.ping().await {
        Ok(()) => StoreHealth::Up,
        Err(StoreError::ConnectionFailure(detail)) => {
            tracing::warn!(error = %detail, "Health check: store unreachable");
            StoreHealth::Unreachable
        }
        Err(err) => {
            tracing::warn!(error = %err, "Health check: store failing");
            StoreHealth::Failing
        }
    };

    let (code, status) = match store {
        StoreHealth::Up => (StatusCode::OK, "ok"),
        StoreHealth::Unreachable | StoreHealth::Failing => {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        }
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
        listing_cached: state.listing.is_warm().await,
    };
    (code, Json(body))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
