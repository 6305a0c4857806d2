//! In-memory store and fixtures for admin tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use lisan_shared::types::{CompanyId, MosqueId, UserId};

use super::error::AdminError;
use super::scope::AdminScope;
use super::store::{AdminStore, MemberQuery};
use super::types::{
    CompanyRecord, LearnerRole, MemberRecord, MosqueRecord, UserRecord, UserWithOrganization,
};

/// A learner with no progress and no organization.
pub fn user(name: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(),
        email: format!("{}@example.org", name.to_lowercase()),
        full_name: name.to_string(),
        role: LearnerRole::Student,
        company_id: None,
        mosque_id: None,
        is_org_admin: false,
        is_super_admin: false,
        is_active: true,
        department: None,
        specialization: None,
        proficiency_level: None,
        assessment_score: None,
        assessment_completed: false,
        total_challenges_completed: 0,
        strengths: Vec::new(),
        recommendations: Vec::new(),
        created_at: Utc::now(),
    }
}

pub fn company(industry: Option<&str>) -> CompanyRecord {
    CompanyRecord {
        id: CompanyId::new(),
        name: "Bosphorus Tours".to_string(),
        industry: industry.map(str::to_string),
        license_count: 25,
    }
}

pub fn mosque() -> MosqueRecord {
    MosqueRecord {
        id: MosqueId::new(),
        name: "Sultan Ahmed Mosque".to_string(),
        location: Some("Istanbul".to_string()),
        license_count: 10,
    }
}

#[derive(Default)]
pub struct InMemoryAdminStore {
    members: Mutex<Vec<MemberRecord>>,
    companies: Mutex<Vec<CompanyRecord>>,
    mosques: Mutex<Vec<MosqueRecord>>,
    fail: AtomicBool,
}

impl InMemoryAdminStore {
    pub fn add_user(&self, user: UserRecord) {
        self.add_member(MemberRecord::bare(user));
    }

    pub fn add_member(&self, member: MemberRecord) {
        self.members.lock().unwrap().push(member);
    }

    pub fn add_company(&self, company: CompanyRecord) {
        self.companies.lock().unwrap().push(company);
    }

    pub fn add_mosque(&self, mosque: MosqueRecord) {
        self.mosques.lock().unwrap().push(mosque);
    }

    /// Makes the next call fail with a data-access error.
    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<(), AdminError> {
        if self.fail.swap(false, Ordering::SeqCst) {
            Err(AdminError::data_access("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl AdminStore for InMemoryAdminStore {
    async fn find_user_with_organization(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserWithOrganization>, AdminError> {
        self.check_failure()?;

        let Some(user) = self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.user.id == user_id)
            .map(|m| m.user.clone())
        else {
            return Ok(None);
        };

        let company = user.company_id.and_then(|id| {
            self.companies
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned()
        });
        let mosque = user.mosque_id.and_then(|id| {
            self.mosques
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == id)
                .cloned()
        });

        Ok(Some(UserWithOrganization {
            user,
            company,
            mosque,
        }))
    }

    async fn list_members(&self, query: &MemberQuery) -> Result<Vec<MemberRecord>, AdminError> {
        self.check_failure()?;

        let search = query.search_term().map(str::to_lowercase);
        let mut members: Vec<MemberRecord> = self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !m.user.is_admin())
            .filter(|m| match &query.scope {
                AdminScope::Global => true,
                AdminScope::Company { company_id, .. } => m.user.company_id == Some(*company_id),
                AdminScope::Mosque { mosque_id } => m.user.mosque_id == Some(*mosque_id),
            })
            .filter(|m| {
                search
                    .as_ref()
                    .is_none_or(|s| m.user.full_name.to_lowercase().contains(s))
            })
            .filter(|m| query.role.is_none_or(|r| m.user.role == r))
            .cloned()
            .collect();

        members.sort_by(|a, b| a.user.full_name.cmp(&b.user.full_name));
        Ok(members)
    }
}
