//! Handlers for application submission, the listing and the dashboard.
//!
//! Submission always answers with a `success`-tagged payload, even when
//! the body cannot be read; the status code mirrors the outcome.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use recruit_core::dashboard;
use recruit_core::store::ListingInvalidator;
use recruit_core::submission::{self, Rejection, RejectionKind, SubmissionOutcome};
use recruit_core::validation::RawApplicationInput;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /applications
// ---------------------------------------------------------------------------

/// Submit an application from the recruitment form.
pub async fn submit_application(
    State(state): State<AppState>,
    payload: Result<Json<RawApplicationInput>, JsonRejection>,
) -> impl IntoResponse {
    let outcome = match payload {
        Ok(Json(raw)) => {
            let deadline = state.config.submission_deadline();
            let pipeline = submission::submit(
                state.store.as_ref(),
                state.listing.as_ref(),
                state.config.submission(),
                raw,
            );
            match tokio::time::timeout(deadline, pipeline).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::error!(?deadline, "Application submission timed out");
                    // The insert may have landed before the deadline.
                    state.listing.invalidate().await;
                    SubmissionOutcome::Rejected(Rejection::unavailable())
                }
            }
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable application payload");
            SubmissionOutcome::Rejected(Rejection::malformed())
        }
    };

    (outcome_status(&outcome), Json(outcome))
}

/// Response for a panic while handling a submission.
///
/// Installed on the submission route so the form still receives a
/// `success: false` payload.
pub fn submission_panic(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Application submission panicked");
    let outcome = SubmissionOutcome::Rejected(Rejection::failed());
    (outcome_status(&outcome), Json(outcome)).into_response()
}

/// HTTP status for a submission outcome.
pub fn outcome_status(outcome: &SubmissionOutcome) -> StatusCode {
    match outcome {
        SubmissionOutcome::Accepted(_) => StatusCode::CREATED,
        SubmissionOutcome::Rejected(rejection) => match rejection.kind {
            RejectionKind::Validation => StatusCode::BAD_REQUEST,
            RejectionKind::Duplicate => StatusCode::CONFLICT,
            RejectionKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            RejectionKind::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

// ---------------------------------------------------------------------------
// GET /applications
// ---------------------------------------------------------------------------

/// List every application, newest first.
pub async fn list_applications(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let applications = state.listing.get_or_load(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: applications }))
}

// ---------------------------------------------------------------------------
// GET /applications/dashboard
// ---------------------------------------------------------------------------

/// Listing with badges, link labels, notes previews and summary counters.
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let applications = state.listing.get_or_load(state.store.as_ref()).await?;
    let view = dashboard::build_dashboard(&applications, Utc::now());
    Ok(Json(DataResponse { data: view }))
}
