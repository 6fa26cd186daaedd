//! Shared response envelope types for API handlers.
//!
//! Read endpoints respond with a `{ "data": ... }` envelope. Submission
//! responses use their own `success`-tagged shape instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
