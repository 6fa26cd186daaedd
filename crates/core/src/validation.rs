//! Field validation for submitted applications.
//!
//! [`validate_application`] turns the raw form payload into a
//! [`NewApplication`] or a map of per-field messages. Fields are checked
//! independently and every violation is reported, so the form can show all
//! problems at once. No I/O happens here.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::application::{Branch, NewApplication, Position};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_YEAR_NOT_WHOLE: &str = "Year must be a whole number";
pub const MSG_INVALID_BRANCH: &str = "Please select a valid branch";
pub const MSG_INVALID_POSITION: &str = "Please select a valid position";
pub const MSG_INVALID_GITHUB: &str = "Please enter a valid GitHub profile URL";
pub const MSG_INVALID_LINKEDIN: &str = "Please enter a valid LinkedIn profile URL";
pub const MSG_INVALID_PROJECT_URL: &str = "Please enter a valid URL for each project";
pub const MSG_TOO_MANY_PROJECTS: &str = "Maximum 5 projects allowed";

/// Maximum length of a GitHub handle.
pub const GITHUB_HANDLE_MAX_LENGTH: usize = 39;

const GITHUB_PROFILE_PREFIX: &str = "https://github.com/";

/// Alphanumeric runs joined by single hyphens.
static GITHUB_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("valid regex"));

static LINKEDIN_PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(?:www\.)?linkedin\.com/in/[A-Za-z0-9-]+/?$").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Form payload exactly as the presentation layer sends it.
///
/// Every field is optional here so a missing field becomes a field error
/// rather than a deserialization failure. `yearOfStudy` may arrive as a
/// number or as the string value of a select element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawApplicationInput {
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub branch: Option<String>,
    pub year_of_study: Option<serde_json::Value>,
    pub preferred_position: Option<String>,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub notes: Option<String>,
    pub projects: Option<Vec<String>>,
}

/// Field name (as sent on the wire) to a human-readable message.
pub type FieldErrors = BTreeMap<&'static str, String>;

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Normalized input with the declarative checks attached.
///
/// Empty strings are already `None`, so `required` covers both "missing"
/// and "empty" for the mandatory fields.
#[derive(Debug, Validate)]
struct ApplicationDraft {
    #[validate(
        required(message = "Name is required"),
        length(max = 100, message = "Name must be less than 100 characters")
    )]
    name: Option<String>,

    #[validate(
        required(message = "Roll number is required"),
        length(max = 20, message = "Roll number must be less than 20 characters")
    )]
    roll_number: Option<String>,

    #[validate(
        required(message = "Branch is required"),
        length(max = 100, message = "Branch must be less than 100 characters"),
        custom(function = "known_branch")
    )]
    branch: Option<String>,

    #[validate(
        required(message = "Year of study is required"),
        range(min = 1, max = 4, message = "Year must be between 1 and 4")
    )]
    year_of_study: Option<i64>,

    #[validate(
        required(message = "Preferred position is required"),
        length(max = 50, message = "Position must be less than 50 characters"),
        custom(function = "known_position")
    )]
    preferred_position: Option<String>,

    #[validate(custom(function = "valid_github_profile"))]
    github_profile: Option<String>,

    #[validate(regex(
        path = *LINKEDIN_PROFILE_RE,
        message = "Please enter a valid LinkedIn profile URL"
    ))]
    linkedin_profile: Option<String>,

    #[validate(length(max = 500, message = "Notes must be less than 500 characters"))]
    notes: Option<String>,

    #[validate(
        length(max = 5, message = "Maximum 5 projects allowed"),
        custom(function = "project_urls")
    )]
    projects: Vec<String>,
}

/// Outcome of reading `yearOfStudy` before the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearInput {
    Missing,
    Whole(i64),
    NotWhole,
}

impl ApplicationDraft {
    fn from_raw(raw: RawApplicationInput, year: YearInput) -> Self {
        let projects = raw
            .projects
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            name: non_empty(raw.name),
            roll_number: non_empty(raw.roll_number),
            branch: non_empty(raw.branch),
            year_of_study: match year {
                YearInput::Whole(y) => Some(y),
                YearInput::Missing | YearInput::NotWhole => None,
            },
            preferred_position: non_empty(raw.preferred_position),
            github_profile: non_empty(raw.github_profile),
            linkedin_profile: non_empty(raw.linkedin_profile),
            notes: non_empty(raw.notes),
            projects,
        }
    }

    /// Convert a draft that passed validation. `None` only if a required
    /// field is absent, which validation already reports.
    fn into_new_application(self) -> Option<NewApplication> {
        Some(NewApplication {
            name: self.name?,
            roll_number: self.roll_number?,
            branch: Branch::from_label(self.branch.as_deref()?)?,
            year_of_study: i16::try_from(self.year_of_study?).ok()?,
            preferred_position: Position::from_label(self.preferred_position.as_deref()?)?,
            github_profile: self.github_profile,
            linkedin_profile: self.linkedin_profile,
            notes: self.notes,
            projects: self.projects,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Validate and normalize a raw form payload.
///
/// Returns every field violation at once. On success, blank optional fields
/// are `None` and blank project entries have been dropped.
pub fn validate_application(raw: RawApplicationInput) -> Result<NewApplication, FieldErrors> {
    let year = read_year(raw.year_of_study.as_ref());
    let draft = ApplicationDraft::from_raw(raw, year);

    let mut errors = match draft.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errs) => collect_field_errors(&errs),
    };
    if year == YearInput::NotWhole {
        errors.insert("yearOfStudy", MSG_YEAR_NOT_WHOLE.to_string());
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    draft.into_new_application().ok_or_else(|| {
        FieldErrors::from([("form", "Please check your form data".to_string())])
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn read_year(value: Option<&serde_json::Value>) -> YearInput {
    use serde_json::Value;

    match value {
        None | Some(Value::Null) => YearInput::Missing,
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(y), _) => YearInput::Whole(y),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e9 => YearInput::Whole(f as i64),
            _ => YearInput::NotWhole,
        },
        Some(Value::String(s)) if s.trim().is_empty() => YearInput::Missing,
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_or(YearInput::NotWhole, YearInput::Whole),
        Some(_) => YearInput::NotWhole,
    }
}

/// Map a struct field name to the camelCase key the form uses.
fn wire_name(field: &str) -> &'static str {
    match field {
        "name" => "name",
        "roll_number" => "rollNumber",
        "branch" => "branch",
        "year_of_study" => "yearOfStudy",
        "preferred_position" => "preferredPosition",
        "github_profile" => "githubProfile",
        "linkedin_profile" => "linkedinProfile",
        "notes" => "notes",
        "projects" => "projects",
        _ => "form",
    }
}

/// Keep the first message reported for each field.
fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map_or_else(|| format!("Invalid value ({})", first.code), |m| m.to_string());
            Some((wire_name(&field), message))
        })
        .collect()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn known_branch(value: &str) -> Result<(), ValidationError> {
    match Branch::from_label(value) {
        Some(_) => Ok(()),
        None => Err(invalid("branch", MSG_INVALID_BRANCH)),
    }
}

fn known_position(value: &str) -> Result<(), ValidationError> {
    match Position::from_label(value) {
        Some(_) => Ok(()),
        None => Err(invalid("position", MSG_INVALID_POSITION)),
    }
}

fn valid_github_profile(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .strip_prefix(GITHUB_PROFILE_PREFIX)
        .is_some_and(is_github_handle);
    if valid {
        Ok(())
    } else {
        Err(invalid("github_profile", MSG_INVALID_GITHUB))
    }
}

fn is_github_handle(handle: &str) -> bool {
    (1..=GITHUB_HANDLE_MAX_LENGTH).contains(&handle.len()) && GITHUB_HANDLE_RE.is_match(handle)
}

fn project_urls(projects: &[String]) -> Result<(), ValidationError> {
    if projects.iter().all(|p| p.validate_url()) {
        Ok(())
    } else {
        Err(invalid("project_url", MSG_INVALID_PROJECT_URL))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
