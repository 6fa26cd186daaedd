//! Application entity and the fixed option sets offered by the form.
//!
//! Branch and position labels are an external contract with the
//! presentation form: they are compared byte-for-byte and stored verbatim.

use serde::Serialize;

use crate::types::{ApplicationId, Timestamp};

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Branch of engineering the applicant studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Cse,
    CseAiml,
    CseDataScience,
    InformationTechnology,
    ElectronicsCommunication,
    ElectricalElectronics,
    Mechanical,
    Civil,
}

impl Branch {
    /// Every branch, in the order the form lists them.
    pub const ALL: [Branch; 8] = [
        Branch::Cse,
        Branch::CseAiml,
        Branch::CseDataScience,
        Branch::InformationTechnology,
        Branch::ElectronicsCommunication,
        Branch::ElectricalElectronics,
        Branch::Mechanical,
        Branch::Civil,
    ];

    /// The exact label submitted by the form and persisted in storage.
    pub fn label(self) -> &'static str {
        match self {
            Branch::Cse => "CSE (CSE)",
            Branch::CseAiml => "CSE and Artificial Intelligence and Machine Learning (AIML)",
            Branch::CseDataScience => "CSE (Data Science)",
            Branch::InformationTechnology => "Information Technology (IT)",
            Branch::ElectronicsCommunication => "Electronics and Communication Engineering (ECE)",
            Branch::ElectricalElectronics => "Electrical and Electronics Engineering (EEE)",
            Branch::Mechanical => "Mechanical Engineering",
            Branch::Civil => "Civil Engineering",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Club position the applicant is applying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    VicePresident,
    Secretary,
    ClubMember,
}

impl Position {
    pub const ALL: [Position; 3] = [
        Position::VicePresident,
        Position::Secretary,
        Position::ClubMember,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::VicePresident => "Vice President",
            Position::Secretary => "Secretary",
            Position::ClubMember => "Club Member",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Officer positions, counted separately on the dashboard.
    pub fn is_leadership(self) -> bool {
        matches!(self, Position::VicePresident | Position::Secretary)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A persisted application, as returned by the store.
///
/// `branch` and `preferred_position` hold the stored labels as-is so rows
/// written under an older option set still list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub year_of_study: i16,
    pub preferred_position: String,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub notes: Option<String>,
    pub projects: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated application ready to be inserted.
///
/// Produced only by [`validate_application`](crate::validation::validate_application).
/// Blank optional fields are already reduced to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub name: String,
    pub roll_number: String,
    pub branch: Branch,
    pub year_of_study: i16,
    pub preferred_position: Position,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub notes: Option<String>,
    pub projects: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
