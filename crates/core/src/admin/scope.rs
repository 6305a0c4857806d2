//! Admin scopes and the permissions they imply.

use serde::{Deserialize, Serialize};

use lisan_shared::types::{CompanyId, MosqueId};

/// Industry classifier that unlocks tourism content for company admins.
pub const TOURISM_INDUSTRY: &str = "tourism";

/// The slice of members an admin may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdminScope {
    /// Platform-wide.
    Global,
    /// One company.
    Company {
        /// Company the admin belongs to.
        company_id: CompanyId,
        /// The company's industry classifier.
        industry: Option<String>,
    },
    /// One mosque.
    Mosque {
        /// Mosque the admin belongs to.
        mosque_id: MosqueId,
    },
}

impl AdminScope {
    /// Short label used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Company { .. } => "company",
            Self::Mosque { .. } => "mosque",
        }
    }
}

/// Returns true when the industry classifier is the tourism sentinel.
#[must_use]
pub fn is_tourism_industry(industry: Option<&str>) -> bool {
    industry.is_some_and(|i| i.trim().eq_ignore_ascii_case(TOURISM_INDUSTRY))
}

/// A single admin capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// See every member in scope.
    ViewAllEmployees,
    /// Edit or deactivate members.
    ManageEmployees,
    /// See cohort analytics.
    ViewAnalytics,
    /// Export member data.
    ExportData,
    /// Manage subscriptions and invoices.
    ManageBilling,
    /// Change organization settings.
    ManageSettings,
    /// See the ROI estimate.
    ViewRoi,
    /// Edit prayer times.
    ManagePrayerTimes,
    /// See cultural awareness metrics.
    ViewCulturalMetrics,
    /// Edit tourism content.
    ManageTourismContent,
    /// Reach the support desk.
    AccessSupport,
    /// Import members in bulk.
    BulkImport,
}

impl Capability {
    /// Every capability, in display order.
    pub const ALL: [Self; 12] = [
        Self::ViewAllEmployees,
        Self::ManageEmployees,
        Self::ViewAnalytics,
        Self::ExportData,
        Self::ManageBilling,
        Self::ManageSettings,
        Self::ViewRoi,
        Self::ManagePrayerTimes,
        Self::ViewCulturalMetrics,
        Self::ManageTourismContent,
        Self::AccessSupport,
        Self::BulkImport,
    ];
}

/// Capability flags granted to an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct AdminPermissions {
    /// See every member in scope.
    pub can_view_all_employees: bool,
    /// Edit or deactivate members.
    pub can_manage_employees: bool,
    /// See cohort analytics.
    pub can_view_analytics: bool,
    /// Export member data.
    pub can_export_data: bool,
    /// Manage subscriptions and invoices.
    pub can_manage_billing: bool,
    /// Change organization settings.
    pub can_manage_settings: bool,
    /// See the ROI estimate.
    pub can_view_roi: bool,
    /// Edit prayer times.
    pub can_manage_prayer_times: bool,
    /// See cultural awareness metrics.
    pub can_view_cultural_metrics: bool,
    /// Edit tourism content.
    pub can_manage_tourism_content: bool,
    /// Reach the support desk.
    pub can_access_support: bool,
    /// Import members in bulk.
    pub can_bulk_import: bool,
}

impl AdminPermissions {
    /// Returns whether a capability is granted.
    #[must_use]
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewAllEmployees => self.can_view_all_employees,
            Capability::ManageEmployees => self.can_manage_employees,
            Capability::ViewAnalytics => self.can_view_analytics,
            Capability::ExportData => self.can_export_data,
            Capability::ManageBilling => self.can_manage_billing,
            Capability::ManageSettings => self.can_manage_settings,
            Capability::ViewRoi => self.can_view_roi,
            Capability::ManagePrayerTimes => self.can_manage_prayer_times,
            Capability::ViewCulturalMetrics => self.can_view_cultural_metrics,
            Capability::ManageTourismContent => self.can_manage_tourism_content,
            Capability::AccessSupport => self.can_access_support,
            Capability::BulkImport => self.can_bulk_import,
        }
    }
}

/// Computes the permission set for a scope.
#[must_use]
pub fn permissions_for(scope: &AdminScope) -> AdminPermissions {
    match scope {
        AdminScope::Global => AdminPermissions {
            can_view_all_employees: true,
            can_manage_employees: true,
            can_view_analytics: true,
            can_export_data: true,
            can_manage_billing: true,
            can_manage_settings: true,
            can_view_roi: true,
            can_manage_prayer_times: true,
            can_view_cultural_metrics: true,
            can_manage_tourism_content: true,
            can_access_support: true,
            can_bulk_import: true,
        },
        AdminScope::Company { industry, .. } => AdminPermissions {
            can_view_all_employees: true,
            can_manage_employees: true,
            can_view_analytics: true,
            can_export_data: true,
            can_manage_billing: false,
            can_manage_settings: false,
            can_view_roi: true,
            can_manage_prayer_times: false,
            can_view_cultural_metrics: true,
            can_manage_tourism_content: is_tourism_industry(industry.as_deref()),
            can_access_support: true,
            can_bulk_import: true,
        },
        AdminScope::Mosque { .. } => AdminPermissions {
            can_view_all_employees: true,
            can_manage_employees: true,
            can_view_analytics: true,
            can_export_data: true,
            can_manage_billing: false,
            can_manage_settings: true,
            can_view_roi: true,
            can_manage_prayer_times: true,
            can_view_cultural_metrics: true,
            can_manage_tourism_content: false,
            can_access_support: true,
            can_bulk_import: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn company(industry: Option<&str>) -> AdminScope {
        AdminScope::Company {
            company_id: CompanyId::new(),
            industry: industry.map(str::to_string),
        }
    }

    fn mosque() -> AdminScope {
        AdminScope::Mosque {
            mosque_id: MosqueId::new(),
        }
    }

    #[test]
    fn test_global_grants_everything() {
        let permissions = permissions_for(&AdminScope::Global);
        for capability in Capability::ALL {
            assert!(permissions.allows(capability), "{capability:?} denied");
        }
    }

    #[rstest]
    #[case(Capability::ManageBilling, false)]
    #[case(Capability::ManageSettings, false)]
    #[case(Capability::ManagePrayerTimes, false)]
    #[case(Capability::ManageTourismContent, false)]
    #[case(Capability::ViewAllEmployees, true)]
    #[case(Capability::ManageEmployees, true)]
    #[case(Capability::ViewAnalytics, true)]
    #[case(Capability::ExportData, true)]
    #[case(Capability::ViewRoi, true)]
    #[case(Capability::ViewCulturalMetrics, true)]
    #[case(Capability::AccessSupport, true)]
    #[case(Capability::BulkImport, true)]
    fn test_company_truth_table(#[case] capability: Capability, #[case] expected: bool) {
        let permissions = permissions_for(&company(Some("hospitality")));
        assert_eq!(permissions.allows(capability), expected);
    }

    #[rstest]
    #[case(Capability::ManageBilling, false)]
    #[case(Capability::ManageTourismContent, false)]
    #[case(Capability::ManagePrayerTimes, true)]
    #[case(Capability::ManageSettings, true)]
    #[case(Capability::ViewAllEmployees, true)]
    #[case(Capability::ManageEmployees, true)]
    #[case(Capability::ViewAnalytics, true)]
    #[case(Capability::ExportData, true)]
    #[case(Capability::ViewRoi, true)]
    #[case(Capability::ViewCulturalMetrics, true)]
    #[case(Capability::AccessSupport, true)]
    #[case(Capability::BulkImport, true)]
    fn test_mosque_truth_table(#[case] capability: Capability, #[case] expected: bool) {
        assert_eq!(permissions_for(&mosque()).allows(capability), expected);
    }

    #[rstest]
    #[case(Some("tourism"), true)]
    #[case(Some(" Tourism "), true)]
    #[case(Some("tourism-agency"), false)]
    #[case(Some("retail"), false)]
    #[case(None, false)]
    fn test_tourism_gate(#[case] industry: Option<&str>, #[case] expected: bool) {
        let permissions = permissions_for(&company(industry));
        assert_eq!(permissions.can_manage_tourism_content, expected);
        assert!(!permissions.can_manage_billing);
    }

    #[test]
    fn test_scope_serializes_with_type_tag() {
        let json = serde_json::to_value(mosque()).unwrap();
        assert_eq!(json["type"], "mosque");

        let json = serde_json::to_value(AdminScope::Global).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "global" }));
    }
}
