//! Application row model and the `projects` column encoding.
//!
//! `projects` is stored as a single JSON text value. An empty list is stored
//! as NULL so the dashboard's "no projects" path reads a missing value.

use recruit_core::application::Application;
use recruit_core::types::{ApplicationId, Timestamp};
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: ApplicationId,
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub year_of_study: i16,
    pub preferred_position: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub notes: Option<String>,
    pub projects: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Application {
            projects: decode_projects(row.projects.as_deref()),
            id: row.id,
            name: row.name,
            roll_number: row.roll_number,
            branch: row.branch,
            year_of_study: row.year_of_study,
            preferred_position: row.preferred_position,
            github_profile: row.github_profile,
            linkedin_profile: row.linkedin_profile,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Encode the project list for the `projects` column.
pub fn encode_projects(projects: &[String]) -> Option<String> {
    if projects.is_empty() {
        return None;
    }
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(projects).ok()
}

/// Decode the `projects` column.
///
/// A JSON array keeps its non-blank string entries in order. Text that is
/// not a JSON array is returned as a single entry instead of failing the
/// whole listing.
pub fn decode_projects(stored: Option<&str>) -> Vec<String> {
    let Some(raw) = stored.filter(|s| !s.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => {
            tracing::warn!(stored = raw, "Stored projects value is not a JSON array");
            vec![raw.to_string()]
        }
    }
}
