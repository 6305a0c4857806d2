//! Cohort analytics over an aggregated member list.
//!
//! Everything here is arithmetic on data already in memory; the summarizer
//! never fails and degrades to zeros on empty input.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use lisan_shared::config::{AnalyticsConfig, DemoModeConfig, ScopeRates};

use super::context::AdminContext;
use super::scope::AdminScope;
use super::types::{EmployeeData, EmployeeStatus};

/// Jitter bound for hours and productivity gain, in percent.
const DEMO_JITTER_PERCENT: i64 = 10;
/// Jitter bound for session length, in minutes.
const DEMO_JITTER_MINUTES: i64 = 5;

/// Per-department breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStats {
    /// Members in the department.
    pub total: usize,
    /// Members at 100% progress.
    pub completed: usize,
    /// Mean progress.
    pub average_progress: Decimal,
    /// Share of completed members, in percent.
    pub completion_rate: Decimal,
}

/// Estimated platform usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeUsage {
    /// Learning hours per month across the cohort.
    pub total_learning_hours: Decimal,
    /// Learning hours per member per month.
    pub average_hours_per_employee: Decimal,
    /// Average session length.
    pub average_session_minutes: Decimal,
    /// Members active this week.
    pub weekly_active_learners: usize,
}

/// Return-on-investment projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoiEstimate {
    /// Annual program cost.
    pub investment: Decimal,
    /// Annual productivity gain.
    pub productivity_gain: Decimal,
    /// (gain - investment) / investment, in percent.
    pub roi_percent: Decimal,
    /// Months until the gain covers the investment.
    pub break_even_months: Decimal,
}

/// Cohort-level analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    /// Members in the list.
    pub total_employees: usize,
    /// Members with `active` status.
    pub active_employees: usize,
    /// Members with `pending` status.
    pub pending_employees: usize,
    /// Members at 100% progress.
    pub completed_employees: usize,
    /// Mean progress.
    pub average_progress: Decimal,
    /// Share of completed members, in percent.
    pub completion_rate: Decimal,
    /// Mean cultural score.
    pub average_cultural_score: Decimal,
    /// Breakdown keyed by department name.
    pub department_stats: BTreeMap<String, DepartmentStats>,
    /// Usage estimate.
    pub time_usage: TimeUsage,
    /// ROI estimate; callers without the ROI capability drop it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiEstimate>,
}

impl AnalyticsSnapshot {
    /// Removes the ROI block.
    #[must_use]
    pub fn without_roi(mut self) -> Self {
        self.roi = None;
        self
    }
}

/// Source of demo-mode jitter.
enum Jitter {
    Off,
    On(StdRng),
}

impl Jitter {
    fn from_config(demo: &DemoModeConfig) -> Self {
        if !demo.enabled {
            return Self::Off;
        }
        match demo.seed {
            Some(seed) => Self::On(StdRng::seed_from_u64(seed)),
            None => Self::On(StdRng::from_os_rng()),
        }
    }

    /// Multiplier in `[1 - bound%, 1 + bound%]`.
    fn factor(&mut self, bound_percent: i64) -> Decimal {
        match self {
            Self::Off => Decimal::ONE,
            Self::On(rng) => {
                let percent = rng.random_range(-bound_percent..=bound_percent);
                Decimal::ONE + Decimal::new(percent, 2)
            }
        }
    }

    /// Offset in `[-bound, bound]`.
    fn offset(&mut self, bound: i64) -> Decimal {
        match self {
            Self::Off => Decimal::ZERO,
            Self::On(rng) => Decimal::from(rng.random_range(-bound..=bound)),
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `part / whole * 100` to one decimal, zero when `whole` is zero.
fn percent(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        Decimal::ZERO
    } else {
        round(
            Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole),
            1,
        )
    }
}

/// `sum / count` to one decimal, zero when `count` is zero.
fn mean(sum: u64, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        round(Decimal::from(sum) / Decimal::from(count), 1)
    }
}

#[derive(Default)]
struct DepartmentTally {
    total: usize,
    completed: usize,
    progress_sum: u64,
}

/// Computes cohort statistics and estimates.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsSummarizer {
    config: AnalyticsConfig,
}

impl AnalyticsSummarizer {
    /// Creates a summarizer with the given rates.
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Rates that apply to a scope.
    #[must_use]
    pub const fn rates_for(&self, scope: &AdminScope) -> &ScopeRates {
        match scope {
            AdminScope::Global => &self.config.global,
            AdminScope::Company { .. } => &self.config.company,
            AdminScope::Mosque { .. } => &self.config.mosque,
        }
    }

    /// Summarizes a member list.
    ///
    /// Deterministic unless demo mode is enabled; with a fixed seed the
    /// jittered figures are reproducible too.
    #[must_use]
    pub fn summarize(&self, employees: &[EmployeeData], context: &AdminContext) -> AnalyticsSnapshot {
        let total = employees.len();
        let active = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count();
        let pending = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Pending)
            .count();
        let completed = employees.iter().filter(|e| e.progress >= 100).count();
        let progress_sum: u64 = employees.iter().map(|e| u64::from(e.progress)).sum();
        let cultural_sum: u64 = employees.iter().map(|e| u64::from(e.cultural_score)).sum();

        let rates = self.rates_for(&context.scope);
        let mut jitter = Jitter::from_config(&self.config.demo_mode);

        let time_usage = self.time_usage(total, active, rates, &mut jitter);
        let roi = Self::roi(total, rates, &mut jitter);

        AnalyticsSnapshot {
            total_employees: total,
            active_employees: active,
            pending_employees: pending,
            completed_employees: completed,
            average_progress: mean(progress_sum, total),
            completion_rate: percent(completed, total),
            average_cultural_score: mean(cultural_sum, total),
            department_stats: department_breakdown(employees),
            time_usage,
            roi: Some(roi),
        }
    }

    fn time_usage(
        &self,
        total: usize,
        active: usize,
        rates: &ScopeRates,
        jitter: &mut Jitter,
    ) -> TimeUsage {
        if total == 0 {
            return TimeUsage {
                total_learning_hours: Decimal::ZERO,
                average_hours_per_employee: Decimal::ZERO,
                average_session_minutes: Decimal::ZERO,
                weekly_active_learners: 0,
            };
        }

        let count = Decimal::from(total);
        let hours = round(
            count * rates.monthly_learning_hours_per_employee * jitter.factor(DEMO_JITTER_PERCENT),
            2,
        );
        let minutes = (self.config.session_minutes_baseline + jitter.offset(DEMO_JITTER_MINUTES))
            .max(Decimal::ZERO);

        TimeUsage {
            total_learning_hours: hours,
            average_hours_per_employee: round(hours / count, 2),
            average_session_minutes: minutes,
            weekly_active_learners: active,
        }
    }

    fn roi(total: usize, rates: &ScopeRates, jitter: &mut Jitter) -> RoiEstimate {
        let count = Decimal::from(total);
        let investment = count * rates.monthly_cost_per_employee * Decimal::from(12);
        let productivity_gain = round(
            count * rates.annual_gain_per_employee * jitter.factor(DEMO_JITTER_PERCENT),
            2,
        );

        let roi_percent = if investment.is_zero() {
            Decimal::ZERO
        } else {
            round(
                (productivity_gain - investment) / investment * Decimal::ONE_HUNDRED,
                0,
            )
        };

        let monthly_gain = productivity_gain / Decimal::from(12);
        let break_even_months = if monthly_gain.is_zero() {
            Decimal::ZERO
        } else {
            round(investment / monthly_gain, 1)
        };

        RoiEstimate {
            investment,
            productivity_gain,
            roi_percent,
            break_even_months,
        }
    }
}

/// Groups by department, then finalizes averages and rates per group.
///
/// Names are compared case-insensitively, like the department filter; a
/// group is labelled with the first spelling seen.
fn department_breakdown(employees: &[EmployeeData]) -> BTreeMap<String, DepartmentStats> {
    let mut tallies: BTreeMap<String, (&str, DepartmentTally)> = BTreeMap::new();

    for employee in employees {
        let (_, tally) = tallies
            .entry(employee.department.to_lowercase())
            .or_insert_with(|| (employee.department.as_str(), DepartmentTally::default()));
        tally.total += 1;
        tally.progress_sum += u64::from(employee.progress);
        if employee.progress >= 100 {
            tally.completed += 1;
        }
    }

    tallies
        .into_values()
        .map(|(department, tally)| {
            (
                department.to_string(),
                DepartmentStats {
                    total: tally.total,
                    completed: tally.completed,
                    average_progress: mean(tally.progress_sum, tally.total),
                    completion_rate: percent(tally.completed, tally.total),
                },
            )
        })
        .collect()
}
