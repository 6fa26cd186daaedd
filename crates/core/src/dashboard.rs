//! Presentation helpers for the applications dashboard.
//!
//! Turns listed [`Application`] records into display cards (badges, project
//! link labels, notes preview) and the summary counters shown above the
//! table. Rendering itself belongs to the presentation layer.

use chrono::Duration;
use serde::Serialize;

use crate::application::{Application, Position};
use crate::types::Timestamp;

/// Notes longer than this are cut for the table cell.
pub const NOTES_PREVIEW_CHARS: usize = 50;

/// Characters kept from a project link that does not parse as a URL.
pub const UNPARSED_LINK_CHARS: usize = 20;

/// Window used for the "recent" counter.
pub const RECENT_WINDOW_HOURS: i64 = 24;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPreview {
    pub text: String,
    /// Whether `text` is shorter than the stored notes.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub url: String,
    pub label: String,
}

/// Colour family for the year-of-study badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearBadge {
    FirstYear,
    SecondYear,
    ThirdYear,
    FinalYear,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionBadge {
    Leadership,
    Member,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCard {
    pub application: Application,
    pub year_badge: YearBadge,
    pub position_badge: PositionBadge,
    pub notes_preview: Option<NotesPreview>,
    pub project_links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub leadership: usize,
    /// Applications created within the last [`RECENT_WINDOW_HOURS`].
    pub recent: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub entries: Vec<ApplicationCard>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Short form of the notes for the table; `None` when there is nothing to show.
pub fn notes_preview(notes: Option<&str>) -> Option<NotesPreview> {
    let notes = notes.filter(|n| !n.trim().is_empty())?;
    if notes.chars().count() > NOTES_PREVIEW_CHARS {
        let head: String = notes.chars().take(NOTES_PREVIEW_CHARS).collect();
        Some(NotesPreview {
            text: format!("{head}..."),
            truncated: true,
        })
    } else {
        Some(NotesPreview {
            text: notes.to_string(),
            truncated: false,
        })
    }
}

/// Host name of a project link without a leading `www.`.
///
/// Links that do not parse (or have no host) fall back to their first
/// [`UNPARSED_LINK_CHARS`] characters.
pub fn project_label(link: &str) -> String {
    match url::Url::parse(link).ok().as_ref().and_then(url::Url::host_str) {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
        None => {
            let head: String = link.chars().take(UNPARSED_LINK_CHARS).collect();
            format!("{head}...")
        }
    }
}

pub fn year_badge(year_of_study: i16) -> YearBadge {
    match year_of_study {
        1 => YearBadge::FirstYear,
        2 => YearBadge::SecondYear,
        3 => YearBadge::ThirdYear,
        4 => YearBadge::FinalYear,
        _ => YearBadge::Unknown,
    }
}

/// Stored labels outside the current option set count as members.
pub fn is_leadership(preferred_position: &str) -> bool {
    Position::from_label(preferred_position).is_some_and(Position::is_leadership)
}

pub fn position_badge(preferred_position: &str) -> PositionBadge {
    if is_leadership(preferred_position) {
        PositionBadge::Leadership
    } else {
        PositionBadge::Member
    }
}

pub fn card(application: Application) -> ApplicationCard {
    let project_links = application
        .projects
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| ProjectLink {
            url: p.clone(),
            label: project_label(p),
        })
        .collect();

    ApplicationCard {
        year_badge: year_badge(application.year_of_study),
        position_badge: position_badge(&application.preferred_position),
        notes_preview: notes_preview(application.notes.as_deref()),
        project_links,
        application,
    }
}

pub fn summarize(applications: &[Application], now: Timestamp) -> DashboardSummary {
    let cutoff = now - Duration::hours(RECENT_WINDOW_HOURS);
    DashboardSummary {
        total: applications.len(),
        leadership: applications
            .iter()
            .filter(|a| is_leadership(&a.preferred_position))
            .count(),
        recent: applications.iter().filter(|a| a.created_at > cutoff).count(),
    }
}

/// Build the dashboard view. Entry order follows the input order.
pub fn build_dashboard(applications: &[Application], now: Timestamp) -> Dashboard {
    Dashboard {
        summary: summarize(applications, now),
        entries: applications.iter().cloned().map(card).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn application(position: &str, created_at: Timestamp) -> Application {
        Application {
            id: uuid::Uuid::new_v4(),
            name: "Asha Rao".into(),
            roll_number: "21CS001".into(),
            branch: "CSE (CSE)".into(),
            year_of_study: 2,
            preferred_position: position.into(),
            github_profile: None,
            linkedin_profile: None,
            notes: None,
            projects: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn short_notes_are_kept_whole() {
        let preview = notes_preview(Some("Loves Rust")).unwrap();
        assert_eq!(preview.text, "Loves Rust");
        assert!(!preview.truncated);
    }

    #[test]
    fn long_notes_are_cut_at_fifty_chars() {
        let notes = "x".repeat(51);
        let preview = notes_preview(Some(&notes)).unwrap();
        assert_eq!(preview.text, format!("{}...", "x".repeat(50)));
        assert!(preview.truncated);

        let exact = "y".repeat(50);
        assert!(!notes_preview(Some(&exact)).unwrap().truncated);
    }

    #[test]
    fn blank_notes_have_no_preview() {
        assert_eq!(notes_preview(None), None);
        assert_eq!(notes_preview(Some("   ")), None);
    }

    #[test]
    fn project_label_uses_host() {
        assert_eq!(project_label("https://www.example.com/demo"), "example.com");
        assert_eq!(project_label("https://cool-project.vercel.app"), "cool-project.vercel.app");
    }

    #[test]
    fn unparsed_project_label_is_shortened() {
        assert_eq!(
            project_label("definitely not a url at all"),
            "definitely not a url..."
        );
    }

    #[test]
    fn badges() {
        assert_eq!(year_badge(1), YearBadge::FirstYear);
        assert_eq!(year_badge(4), YearBadge::FinalYear);
        assert_eq!(year_badge(7), YearBadge::Unknown);
        assert_eq!(position_badge("Secretary"), PositionBadge::Leadership);
        assert_eq!(position_badge("Club Member"), PositionBadge::Member);
        assert_eq!(position_badge("Team Lead"), PositionBadge::Member);
    }

    #[test]
    fn card_skips_blank_project_links() {
        let mut app = application("Club Member", Utc::now());
        app.projects = vec!["https://a.com".into(), " ".into()];
        let card = card(app);
        assert_eq!(
            card.project_links,
            [ProjectLink {
                url: "https://a.com".into(),
                label: "a.com".into(),
            }]
        );
    }

    #[test]
    fn summary_counts_leadership_and_recent() {
        let now = Utc::now();
        let apps = [
            application("Vice President", now - Duration::hours(1)),
            application("Secretary", now - Duration::hours(30)),
            application("Club Member", now - Duration::minutes(5)),
            application("Club Member", now - Duration::days(3)),
        ];

        let summary = summarize(&apps, now);
        assert_eq!(
            summary,
            DashboardSummary {
                total: 4,
                leadership: 2,
                recent: 2,
            }
        );

        let dashboard = build_dashboard(&apps, now);
        assert_eq!(dashboard.entries.len(), 4);
        assert_eq!(dashboard.entries[0].position_badge, PositionBadge::Leadership);
    }

    #[test]
    fn empty_listing_summarizes_to_zero() {
        assert_eq!(summarize(&[], Utc::now()), DashboardSummary::default());
    }
}
