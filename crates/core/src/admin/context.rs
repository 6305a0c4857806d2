//! Resolved admin context.

use serde::Serialize;

use super::error::AdminError;
use super::scope::{AdminPermissions, AdminScope, Capability};
use super::types::{OrganizationRecord, UserRecord};

/// Everything a request needs to know about the acting admin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminContext {
    /// The acting user.
    pub user: UserRecord,
    /// Visible slice of members.
    pub scope: AdminScope,
    /// Granted capabilities.
    pub permissions: AdminPermissions,
    /// The organization behind an organization scope.
    pub organization: Option<OrganizationRecord>,
}

impl AdminContext {
    /// Fails with `Forbidden` unless the capability is granted.
    pub fn require(&self, capability: Capability) -> Result<(), AdminError> {
        if self.permissions.allows(capability) {
            Ok(())
        } else {
            Err(AdminError::Forbidden(format!(
                "{} scope lacks {capability:?}",
                self.scope.kind()
            )))
        }
    }
}
