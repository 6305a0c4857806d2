//! Role-scoped admin analytics.
//!
//! An admin is resolved to a scope, the members inside that scope are
//! listed and enriched, and the enriched list is summarized.

pub mod analytics;
pub mod context;
pub mod employees;
pub mod error;
pub mod resolver;
pub mod scope;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod test_support;

pub use analytics::{AnalyticsSnapshot, AnalyticsSummarizer, DepartmentStats, RoiEstimate, TimeUsage};
pub use context::AdminContext;
pub use employees::{Department, EmployeeAggregator, enrich, resolve_department};
pub use error::AdminError;
pub use resolver::{ScopeResolver, build_context};
pub use scope::{AdminPermissions, AdminScope, Capability, permissions_for};
pub use store::{AdminStore, MemberQuery};
pub use types::{
    Achievement, AssessmentRecord, CompanyRecord, EmployeeData, EmployeeFilters, EmployeeStatus,
    LearnerRole, MemberRecord, MosqueRecord, OrganizationRecord, ProgressItem, ScenarioResult,
    UserRecord, UserWithOrganization,
};
