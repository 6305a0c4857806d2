//! Member aggregation: scoped listing plus derived dashboard fields.

use std::sync::Arc;

use super::context::AdminContext;
use super::error::AdminError;
use super::store::{AdminStore, MemberQuery};
use super::types::{
    EmployeeData, EmployeeFilters, EmployeeStatus, LearnerRole, MemberRecord, ProgressItem,
    ScenarioResult,
};

/// Credit for a completed placement assessment.
pub const ASSESSMENT_CREDIT: i64 = 30;
/// Maximum credit earned through challenges.
pub const CHALLENGE_CREDIT_CAP: i64 = 70;
/// Challenges needed for the full challenge credit.
pub const CHALLENGES_FOR_FULL_CREDIT: i64 = 20;
/// Cultural score used when nothing better is known.
pub const NEUTRAL_CULTURAL_SCORE: u8 = 75;

/// Department a member is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// Mosque guards.
    Security,
    /// Front-of-house professionals.
    CustomerService,
    /// Tour guides.
    Tourism,
    /// Managers and staff.
    Management,
    /// Everyone else.
    General,
}

impl Department {
    const ALL: [Self; 5] = [
        Self::Security,
        Self::CustomerService,
        Self::Tourism,
        Self::Management,
        Self::General,
    ];

    /// Matches a display name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::CustomerService => "Customer Service",
            Self::Tourism => "Tourism",
            Self::Management => "Management",
            Self::General => "General",
        }
    }

    /// Maps a role (and, for business professionals, a specialization).
    #[must_use]
    pub fn for_role(role: LearnerRole, specialization: Option<&str>) -> Self {
        match role {
            LearnerRole::MosqueGuard => Self::Security,
            LearnerRole::TourGuide => Self::Tourism,
            LearnerRole::Admin => Self::Management,
            LearnerRole::Student => Self::General,
            LearnerRole::BusinessProfessional => {
                let normalized = specialization
                    .unwrap_or_default()
                    .trim()
                    .to_lowercase()
                    .replace(['-', ' '], "_");
                match normalized.as_str() {
                    "customer_service" | "hospitality" | "retail" => Self::CustomerService,
                    "management" | "leadership" | "executive" => Self::Management,
                    _ => Self::General,
                }
            }
        }
    }
}

/// Returns the stored department when present, else the role-derived one.
///
/// A stored name that matches a known department is spelled the canonical
/// way, so `"security"` and the derived `"Security"` group together.
#[must_use]
pub fn resolve_department(
    stored: Option<&str>,
    role: LearnerRole,
    specialization: Option<&str>,
) -> String {
    match stored.map(str::trim).filter(|d| !d.is_empty()) {
        Some(department) => Department::from_name(department)
            .map_or_else(|| department.to_string(), |d| d.as_str().to_string()),
        None => Department::for_role(role, specialization).as_str().to_string(),
    }
}

/// Integer division rounding half up; `denominator` must be positive.
const fn rounded_div(numerator: i64, denominator: i64) -> i64 {
    (numerator * 2 + denominator) / (denominator * 2)
}

fn clamp_percent(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 100)).unwrap_or(100)
}

fn count_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Course progress in percent.
///
/// Counters win when either is set: assessment credit plus a capped linear
/// share of challenges. Otherwise the completed ratio of progress items.
#[must_use]
pub fn derive_progress(
    assessment_completed: bool,
    challenges_completed: i32,
    items: &[ProgressItem],
) -> u8 {
    let challenges = i64::from(challenges_completed.max(0));

    let value = if assessment_completed || challenges > 0 {
        let base = if assessment_completed {
            ASSESSMENT_CREDIT
        } else {
            0
        };
        let earned = challenges.min(CHALLENGES_FOR_FULL_CREDIT) * CHALLENGE_CREDIT_CAP;
        base + rounded_div(earned, CHALLENGES_FOR_FULL_CREDIT)
    } else if items.is_empty() {
        0
    } else {
        let completed = count_i64(items.iter().filter(|i| i.completed).count());
        rounded_div(completed * 100, count_i64(items.len()))
    };

    clamp_percent(value)
}

/// Cultural awareness score in percent.
#[must_use]
pub fn derive_cultural_score(results: &[ScenarioResult], assessment_score: Option<i32>) -> u8 {
    if !results.is_empty() {
        let neutral = i32::from(NEUTRAL_CULTURAL_SCORE);
        let sum: i64 = results
            .iter()
            .map(|r| i64::from(r.cultural_score.unwrap_or(neutral).clamp(0, 100)))
            .sum();
        return clamp_percent(rounded_div(sum, count_i64(results.len())));
    }

    match assessment_score {
        // 90% of the placement score, lifted by ten points.
        Some(score) => clamp_percent(rounded_div(i64::from(score.clamp(0, 100)) * 9, 10) + 10),
        None => NEUTRAL_CULTURAL_SCORE,
    }
}

/// Dashboard status.
#[must_use]
pub const fn derive_status(assessment_completed: bool) -> EmployeeStatus {
    if assessment_completed {
        EmployeeStatus::Active
    } else {
        EmployeeStatus::Pending
    }
}

/// Enriches one member with its derived fields.
#[must_use]
pub fn enrich(member: MemberRecord) -> EmployeeData {
    let MemberRecord {
        user,
        progress_items,
        assessments,
        scenario_results,
        achievements,
    } = member;

    let assessment_score = user.assessment_score.or_else(|| {
        assessments
            .iter()
            .max_by_key(|a| a.completed_at)
            .map(|a| a.score)
    });

    EmployeeData {
        progress: derive_progress(
            user.assessment_completed,
            user.total_challenges_completed,
            &progress_items,
        ),
        cultural_score: derive_cultural_score(&scenario_results, assessment_score),
        status: derive_status(user.assessment_completed),
        department: resolve_department(
            user.department.as_deref(),
            user.role,
            user.specialization.as_deref(),
        ),
        achievements_count: achievements.len(),
        scenarios_completed: scenario_results.len(),
        user,
    }
}

/// Lists the members an admin may see, with derived fields.
pub struct EmployeeAggregator<S: AdminStore> {
    store: Arc<S>,
}

impl<S: AdminStore> EmployeeAggregator<S> {
    /// Creates an aggregator over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists scoped members.
    ///
    /// Name and role filters run in the store; the department filter runs
    /// here because department may be derived.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::DataAccess` if the store fails.
    pub async fn list_scoped_employees(
        &self,
        context: &AdminContext,
        filters: &EmployeeFilters,
    ) -> Result<Vec<EmployeeData>, AdminError> {
        let query = MemberQuery {
            scope: context.scope.clone(),
            search: filters.search.clone(),
            role: filters.role,
        };

        let members = self.store.list_members(&query).await?;

        let department = filters
            .department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        Ok(members
            .into_iter()
            .map(enrich)
            .filter(|e| department.is_none_or(|d| e.department.eq_ignore_ascii_case(d)))
            .collect())
    }
}
