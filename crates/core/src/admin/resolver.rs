//! Scope resolution for the acting admin.

use std::sync::Arc;

use lisan_shared::types::UserId;

use super::context::AdminContext;
use super::error::AdminError;
use super::scope::{AdminScope, permissions_for};
use super::store::AdminStore;
use super::types::{OrganizationRecord, UserWithOrganization};

/// Resolves which members an admin may see and what they may do.
pub struct ScopeResolver<S: AdminStore> {
    store: Arc<S>,
}

impl<S: AdminStore> ScopeResolver<S> {
    /// Creates a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches the acting user and derives its admin context.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the user does not exist (`NotFound`)
    /// - the user has no admin flag (`Forbidden`)
    /// - an organization admin has no resolvable organization (`InvalidConfiguration`)
    /// - the store fails (`DataAccess`)
    pub async fn resolve_admin_context(&self, user_id: UserId) -> Result<AdminContext, AdminError> {
        let found = self
            .store
            .find_user_with_organization(user_id)
            .await?
            .ok_or(AdminError::NotFound(user_id))?;

        build_context(found)
    }
}

/// Derives the admin context from an already-fetched user.
///
/// Precedence: super-admin flag, then company, then mosque.
///
/// # Errors
///
/// `Forbidden` without an admin flag, `InvalidConfiguration` when an
/// organization admin's organization cannot be resolved.
pub fn build_context(found: UserWithOrganization) -> Result<AdminContext, AdminError> {
    let UserWithOrganization {
        user,
        company,
        mosque,
    } = found;

    if !user.is_admin() {
        return Err(AdminError::Forbidden(format!(
            "user {} is not an administrator",
            user.id
        )));
    }

    let (scope, organization) = if user.is_super_admin {
        (AdminScope::Global, None)
    } else if let Some(company_id) = user.company_id {
        let company = company.filter(|c| c.id == company_id).ok_or_else(|| {
            AdminError::InvalidConfiguration(format!("company {company_id} does not exist"))
        })?;
        (
            AdminScope::Company {
                company_id,
                industry: company.industry.clone(),
            },
            Some(OrganizationRecord::Company(company)),
        )
    } else if let Some(mosque_id) = user.mosque_id {
        let mosque = mosque.filter(|m| m.id == mosque_id).ok_or_else(|| {
            AdminError::InvalidConfiguration(format!("mosque {mosque_id} does not exist"))
        })?;
        (
            AdminScope::Mosque { mosque_id },
            Some(OrganizationRecord::Mosque(mosque)),
        )
    } else {
        return Err(AdminError::InvalidConfiguration(format!(
            "admin {} has no organization",
            user.id
        )));
    };

    let permissions = permissions_for(&scope);

    Ok(AdminContext {
        user,
        scope,
        permissions,
        organization,
    })
}
