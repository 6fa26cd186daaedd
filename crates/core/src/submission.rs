//! Submission pipeline: validate, check for a duplicate, write, invalidate.
//!
//! [`submit`] never fails. Every path ends in exactly one
//! [`SubmissionOutcome`] carrying a displayable message, and there is no
//! retry: callers resubmit the full input.

use serde::{Serialize, Serializer};

use crate::error::StoreError;
use crate::store::{ApplicationStore, ListingInvalidator};
use crate::types::{ApplicationId, Timestamp};
use crate::validation::{validate_application, FieldErrors, RawApplicationInput};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_ACCEPTED: &str = "Application submitted successfully!";
pub const MSG_INVALID_FORM: &str = "Please check your form data";
pub const MSG_DUPLICATE_ROLL_NUMBER: &str = "An application with this roll number already exists";
pub const MSG_STORE_UNAVAILABLE: &str = "Database connection failed. Please try again later.";
pub const MSG_SUBMISSION_FAILED: &str = "Failed to submit application. Please try again.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Settings the pipeline needs from the deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionConfig {
    /// Include raw storage error text in failure payloads. Off in production.
    pub expose_diagnostics: bool,
}

/// Returned to the form after a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: ApplicationId,
    pub name: String,
    pub submitted_at: Timestamp,
}

/// Why a submission was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// One or more fields failed validation. Storage was not touched.
    Validation,
    /// The roll number is already registered.
    Duplicate,
    /// The store could not be reached.
    Unavailable,
    /// Any other storage failure.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub message: &'static str,
    pub field_errors: Option<FieldErrors>,
    /// Raw storage error text, present only when diagnostics are exposed.
    pub diagnostic: Option<String>,
}

impl Rejection {
    fn new(kind: RejectionKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            field_errors: None,
            diagnostic: None,
        }
    }

    /// Rejection for a payload that could not be read as a form at all.
    pub fn malformed() -> Self {
        Self::new(RejectionKind::Validation, MSG_INVALID_FORM)
    }

    pub fn invalid(field_errors: FieldErrors) -> Self {
        Self {
            field_errors: Some(field_errors),
            ..Self::new(RejectionKind::Validation, MSG_INVALID_FORM)
        }
    }

    pub fn duplicate() -> Self {
        Self::new(RejectionKind::Duplicate, MSG_DUPLICATE_ROLL_NUMBER)
    }

    /// The store could not be reached, or did not answer in time.
    pub fn unavailable() -> Self {
        Self::new(RejectionKind::Unavailable, MSG_STORE_UNAVAILABLE)
    }

    /// Any other failure, with no diagnostic attached.
    pub fn failed() -> Self {
        Self::new(RejectionKind::Failed, MSG_SUBMISSION_FAILED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted(SubmissionReceipt),
    Rejected(Rejection),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}

/// Wire shape shared by both outcomes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeBody<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a SubmissionReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<&'a FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<&'a str>,
}

impl Serialize for SubmissionOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            SubmissionOutcome::Accepted(receipt) => OutcomeBody {
                success: true,
                message: MSG_ACCEPTED,
                data: Some(receipt),
                field_errors: None,
                diagnostic: None,
            },
            SubmissionOutcome::Rejected(rejection) => OutcomeBody {
                success: false,
                message: rejection.message,
                data: None,
                field_errors: rejection.field_errors.as_ref(),
                diagnostic: rejection.diagnostic.as_deref(),
            },
        };
        body.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run one submission through validation, the duplicate pre-check and the
/// insert, then invalidate the listing on success.
///
/// The pre-check and the insert are separate round-trips. Two concurrent
/// submissions with the same roll number can both pass the pre-check; the
/// store's unique constraint rejects the second insert with
/// [`StoreError::DuplicateKey`], which maps to the same message.
pub async fn submit<S, L>(
    store: &S,
    listing: &L,
    config: SubmissionConfig,
    raw: RawApplicationInput,
) -> SubmissionOutcome
where
    S: ApplicationStore + ?Sized,
    L: ListingInvalidator + ?Sized,
{
    let application = match validate_application(raw) {
        Ok(application) => application,
        Err(field_errors) => {
            tracing::debug!(
                fields = ?field_errors.keys().collect::<Vec<_>>(),
                "Application rejected by validation",
            );
            return SubmissionOutcome::Rejected(Rejection::invalid(field_errors));
        }
    };

    match store.roll_number_exists(&application.roll_number).await {
        Ok(false) => {}
        Ok(true) => {
            tracing::info!(
                roll_number = %application.roll_number,
                "Application rejected: roll number already registered",
            );
            return SubmissionOutcome::Rejected(Rejection::duplicate());
        }
        Err(err) => return reject_store_failure(err, config, "duplicate check"),
    }

    let created = match store.insert(&application).await {
        Ok(created) => created,
        Err(err) => return reject_store_failure(err, config, "insert"),
    };

    listing.invalidate().await;

    tracing::info!(
        application_id = %created.id,
        roll_number = %created.roll_number,
        "Application submitted",
    );

    SubmissionOutcome::Accepted(SubmissionReceipt {
        id: created.id,
        name: created.name,
        submitted_at: created.created_at,
    })
}

/// Map a storage failure to its user-facing rejection.
///
/// Infrastructure failures are logged in full regardless of configuration;
/// only the payload's diagnostic text is gated.
fn reject_store_failure(
    err: StoreError,
    config: SubmissionConfig,
    stage: &'static str,
) -> SubmissionOutcome {
    let rejection = match err {
        StoreError::DuplicateKey => {
            tracing::info!(stage, "Application rejected by unique constraint on roll number");
            Rejection::duplicate()
        }
        StoreError::ConnectionFailure(detail) => {
            tracing::error!(stage, error = %detail, "Application store unreachable");
            Rejection::unavailable()
        }
        StoreError::Other(detail) => {
            tracing::error!(stage, error = %detail, "Application store failure");
            Rejection {
                diagnostic: config.expose_diagnostics.then_some(detail),
                ..Rejection::failed()
            }
        }
    };
    SubmissionOutcome::Rejected(rejection)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
