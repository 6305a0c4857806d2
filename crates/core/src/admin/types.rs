//! Admin domain types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lisan_shared::types::{CompanyId, MosqueId, UserId};

/// Role tag stored on every user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearnerRole {
    /// Guard at a mosque open to visitors.
    MosqueGuard,
    /// Licensed tour guide.
    TourGuide,
    /// Business professional (hospitality, retail, management...).
    BusinessProfessional,
    /// Individual learner without a professional track.
    Student,
    /// Organization staff account.
    Admin,
}

impl LearnerRole {
    /// Returns the database / wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MosqueGuard => "mosque_guard",
            Self::TourGuide => "tour_guide",
            Self::BusinessProfessional => "business_professional",
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for LearnerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mosque_guard" => Ok(Self::MosqueGuard),
            "tour_guide" => Ok(Self::TourGuide),
            "business_professional" => Ok(Self::BusinessProfessional),
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A platform user as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Role tag.
    pub role: LearnerRole,
    /// Company the user belongs to.
    pub company_id: Option<CompanyId>,
    /// Mosque the user belongs to.
    pub mosque_id: Option<MosqueId>,
    /// Administers the referenced organization.
    pub is_org_admin: bool,
    /// Administers the whole platform.
    pub is_super_admin: bool,
    /// False once soft-deactivated.
    pub is_active: bool,
    /// Stored department, if any.
    pub department: Option<String>,
    /// Professional specialization (used for business professionals).
    pub specialization: Option<String>,
    /// Self-reported or assessed proficiency level.
    pub proficiency_level: Option<String>,
    /// Placement assessment score (0-100).
    pub assessment_score: Option<i32>,
    /// Whether the placement assessment was completed.
    pub assessment_completed: bool,
    /// Number of completed challenges.
    pub total_challenges_completed: i32,
    /// Strengths reported by the last assessment.
    pub strengths: Vec<String>,
    /// Recommendations reported by the last assessment.
    pub recommendations: Vec<String>,
    /// Signup time.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Returns true if either admin flag is set.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_org_admin || self.is_super_admin
    }
}

/// Type-A organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company ID.
    pub id: CompanyId,
    /// Company name.
    pub name: String,
    /// Industry classifier.
    pub industry: Option<String>,
    /// Purchased seats.
    pub license_count: i32,
}

/// Type-B organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosqueRecord {
    /// Mosque ID.
    pub id: MosqueId,
    /// Mosque name.
    pub name: String,
    /// City or district.
    pub location: Option<String>,
    /// Purchased seats.
    pub license_count: i32,
}

/// Either organization variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrganizationRecord {
    /// A company.
    Company(CompanyRecord),
    /// A mosque.
    Mosque(MosqueRecord),
}

impl OrganizationRecord {
    /// Organization display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Company(c) => &c.name,
            Self::Mosque(m) => &m.name,
        }
    }
}

/// A user joined with the organizations its foreign keys point at.
///
/// Either side may be missing when the key is null or dangling.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithOrganization {
    /// The user row.
    pub user: UserRecord,
    /// The referenced company, if loaded.
    pub company: Option<CompanyRecord>,
    /// The referenced mosque, if loaded.
    pub mosque: Option<MosqueRecord>,
}

/// One learning module entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressItem {
    /// Module key.
    pub module_key: String,
    /// Whether the module is done.
    pub completed: bool,
}

/// A completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Score (0-100).
    pub score: i32,
    /// Completion time.
    pub completed_at: DateTime<Utc>,
}

/// Outcome of a role-play scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario key.
    pub scenario_key: String,
    /// Cultural awareness score (0-100), if graded.
    pub cultural_score: Option<i32>,
    /// Completion time.
    pub completed_at: DateTime<Utc>,
}

/// An earned badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Badge key.
    pub achievement_key: String,
    /// When it was earned.
    pub earned_at: DateTime<Utc>,
}

/// A member row with its nested collections.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRecord {
    /// The user row.
    pub user: UserRecord,
    /// Learning progress entries.
    pub progress_items: Vec<ProgressItem>,
    /// Assessments, most recent first.
    pub assessments: Vec<AssessmentRecord>,
    /// Scenario results.
    pub scenario_results: Vec<ScenarioResult>,
    /// Earned achievements.
    pub achievements: Vec<Achievement>,
}

impl MemberRecord {
    /// Creates a member record with empty nested collections.
    #[must_use]
    pub const fn bare(user: UserRecord) -> Self {
        Self {
            user,
            progress_items: Vec::new(),
            assessments: Vec::new(),
            scenario_results: Vec::new(),
            achievements: Vec::new(),
        }
    }
}

/// Member status shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Placement assessment done.
    Active,
    /// Waiting on the placement assessment.
    Pending,
    /// Deactivated.
    Inactive,
    /// Enrolled in instructor-led training.
    Training,
}

/// A member enriched with derived dashboard fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeData {
    /// The underlying user row.
    #[serde(flatten)]
    pub user: UserRecord,
    /// Course progress (0-100).
    pub progress: u8,
    /// Cultural awareness score (0-100).
    pub cultural_score: u8,
    /// Dashboard status.
    pub status: EmployeeStatus,
    /// Department, stored or derived.
    pub department: String,
    /// Number of earned achievements.
    pub achievements_count: usize,
    /// Number of scenario results.
    pub scenarios_completed: usize,
}

/// Optional narrowing applied when listing members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeFilters {
    /// Case-insensitive substring of the full name.
    pub search: Option<String>,
    /// Exact role tag.
    pub role: Option<LearnerRole>,
    /// Department name (case-insensitive).
    pub department: Option<String>,
}
