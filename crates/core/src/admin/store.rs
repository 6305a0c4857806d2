//! Data-store seam for the admin flow.

use std::future::Future;

use lisan_shared::types::UserId;

use super::error::AdminError;
use super::scope::AdminScope;
use super::types::{LearnerRole, MemberRecord, UserWithOrganization};

/// Server-side member query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberQuery {
    /// Scope constraint.
    pub scope: AdminScope,
    /// Case-insensitive substring of the full name.
    pub search: Option<String>,
    /// Exact role tag.
    pub role: Option<LearnerRole>,
}

impl MemberQuery {
    /// Returns the search term, ignoring blank input.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Repository trait for admin reads.
///
/// Implemented by the db crate; tests use in-memory doubles.
pub trait AdminStore: Send + Sync {
    /// Loads a user together with its referenced organization.
    fn find_user_with_organization(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<UserWithOrganization>, AdminError>> + Send;

    /// Lists non-admin members matching the query, ordered by name, with
    /// nested collections loaded.
    fn list_members(
        &self,
        query: &MemberQuery,
    ) -> impl Future<Output = Result<Vec<MemberRecord>, AdminError>> + Send;
}
