//! Admin dashboard routes.
//!
//! Every handler resolves the caller's admin context first; listing and
//! analytics are then confined to that context's scope.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use lisan_core::admin::{
    AdminContext, AnalyticsSnapshot, Capability, EmployeeAggregator, EmployeeData,
    EmployeeFilters, LearnerRole, ScopeResolver,
};
use lisan_db::AdminRepository;
use lisan_shared::AppError;

/// Creates the admin routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/context", get(get_context))
        .route("/admin/employees", get(list_employees))
        .route("/admin/analytics", get(get_analytics))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Member list filters as they arrive on the query string.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    /// Name substring.
    pub search: Option<String>,
    /// Role tag.
    pub role: Option<String>,
    /// Department name.
    pub department: Option<String>,
}

impl EmployeeQuery {
    /// Converts to domain filters; blank values are ignored.
    pub fn into_filters(self) -> Result<EmployeeFilters, AppError> {
        let role = match self.role.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<LearnerRole>().map_err(AppError::Validation)?),
        };

        Ok(EmployeeFilters {
            search: self.search,
            role,
            department: self.department,
        })
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the member list.
#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    /// Members in scope.
    pub employees: Vec<EmployeeData>,
    /// Number of members returned.
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

fn admin_store(state: &AppState) -> Arc<AdminRepository> {
    Arc::new(AdminRepository::new((*state.db).clone()))
}

async fn resolve_context(
    store: &Arc<AdminRepository>,
    auth: &AuthUser,
) -> Result<AdminContext, ApiError> {
    let context = ScopeResolver::new(Arc::clone(store))
        .resolve_admin_context(auth.user_id())
        .await?;

    info!(
        user_id = %context.user.id,
        scope = context.scope.kind(),
        "Resolved admin context"
    );

    Ok(context)
}

async fn get_context(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AdminContext>, ApiError> {
    let store = admin_store(&state);
    let context = resolve_context(&store, &auth).await?;
    Ok(Json(context))
}

async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
    auth: AuthUser,
) -> Result<Json<EmployeeListResponse>, ApiError> {
    let filters = query.into_filters()?;
    let store = admin_store(&state);
    let context = resolve_context(&store, &auth).await?;
    context.require(Capability::ViewAllEmployees)?;

    let employees = EmployeeAggregator::new(store)
        .list_scoped_employees(&context, &filters)
        .await?;

    Ok(Json(EmployeeListResponse {
        total: employees.len(),
        employees,
    }))
}

async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
    auth: AuthUser,
) -> Result<Json<AnalyticsSnapshot>, ApiError> {
    let filters = query.into_filters()?;
    let store = admin_store(&state);
    let context = resolve_context(&store, &auth).await?;
    context.require(Capability::ViewAnalytics)?;

    let employees = EmployeeAggregator::new(store)
        .list_scoped_employees(&context, &filters)
        .await?;

    let snapshot = state.analytics.summarize(&employees, &context);
    if context.permissions.can_view_roi {
        Ok(Json(snapshot))
    } else {
        Ok(Json(snapshot.without_roi()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_ignored() {
        let filters = EmployeeQuery {
            search: None,
            role: Some("  ".to_string()),
            department: None,
        }
        .into_filters()
        .unwrap();

        assert_eq!(filters, EmployeeFilters::default());
    }

    #[test]
    fn test_role_filter_is_parsed() {
        let filters = EmployeeQuery {
            search: Some("ali".to_string()),
            role: Some("mosque_guard".to_string()),
            department: Some("Security".to_string()),
        }
        .into_filters()
        .unwrap();

        assert_eq!(filters.role, Some(LearnerRole::MosqueGuard));
        assert_eq!(filters.search.as_deref(), Some("ali"));
        assert_eq!(filters.department.as_deref(), Some("Security"));
    }

    #[test]
    fn test_unknown_role_is_a_validation_error() {
        let err = EmployeeQuery {
            role: Some("imam".to_string()),
            ..EmployeeQuery::default()
        }
        .into_filters()
        .unwrap_err();

        assert_eq!(err.status_code(), 400);
    }
}
