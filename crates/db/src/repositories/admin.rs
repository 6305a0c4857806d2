//! Admin repository for database operations.
//!
//! Implements the admin store using SeaORM. Nested member collections are
//! loaded with one query per table, each restricted by a subquery over the
//! same member filter so the bind count does not grow with the cohort.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, SelectStatement};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, Select,
};
use uuid::Uuid;

use crate::entities::{
    achievements, assessments, companies, learning_progress, mosques, scenario_results,
    sea_orm_active_enums::LearnerRole as DbLearnerRole, users,
};
use lisan_core::admin::{
    Achievement, AdminError, AdminScope, AdminStore, AssessmentRecord, CompanyRecord, LearnerRole,
    MemberQuery, MemberRecord, MosqueRecord, ProgressItem, ScenarioResult, UserRecord,
    UserWithOrganization,
};
use lisan_shared::types::{CompanyId, MosqueId, UserId};

/// Nested rows for a batch of members, one vector per table.
type MemberChildren = (
    Vec<learning_progress::Model>,
    Vec<assessments::Model>,
    Vec<scenario_results::Model>,
    Vec<achievements::Model>,
);

/// Admin repository implementation.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    db: DatabaseConnection,
}

impl AdminRepository {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_children(&self, members: SelectStatement) -> Result<MemberChildren, DbErr> {
        tokio::try_join!(
            learning_progress::Entity::find()
                .filter(learning_progress::Column::UserId.in_subquery(members.clone()))
                .order_by_asc(learning_progress::Column::ModuleKey)
                .all(&self.db),
            assessments::Entity::find()
                .filter(assessments::Column::UserId.in_subquery(members.clone()))
                .order_by_desc(assessments::Column::CompletedAt)
                .all(&self.db),
            scenario_results::Entity::find()
                .filter(scenario_results::Column::UserId.in_subquery(members.clone()))
                .order_by_asc(scenario_results::Column::CompletedAt)
                .all(&self.db),
            achievements::Entity::find()
                .filter(achievements::Column::UserId.in_subquery(members))
                .order_by_asc(achievements::Column::EarnedAt)
                .all(&self.db),
        )
    }
}

/// Non-admin users inside the scope, matching the search and role filters.
fn member_select(query: &MemberQuery) -> Select<users::Entity> {
    let mut select = users::Entity::find()
        .filter(users::Column::IsOrgAdmin.eq(false))
        .filter(users::Column::IsSuperAdmin.eq(false));

    select = match &query.scope {
        AdminScope::Global => select,
        AdminScope::Company { company_id, .. } => {
            select.filter(users::Column::CompanyId.eq(company_id.into_inner()))
        }
        AdminScope::Mosque { mosque_id } => {
            select.filter(users::Column::MosqueId.eq(mosque_id.into_inner()))
        }
    };

    if let Some(term) = query.search_term() {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col((users::Entity, users::Column::FullName))))
                .like(contains_pattern(term)),
        );
    }

    if let Some(role) = query.role {
        select = select.filter(users::Column::Role.eq(to_db_role(role)));
    }

    select
}

impl AdminStore for AdminRepository {
    async fn find_user_with_organization(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserWithOrganization>, AdminError> {
        let Some(user) = users::Entity::find_by_id(user_id.into_inner())
            .one(&self.db)
            .await
            .map_err(data_access)?
        else {
            return Ok(None);
        };

        let company = match user.company_id {
            Some(id) => companies::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(data_access)?,
            None => None,
        };

        let mosque = match user.mosque_id {
            Some(id) => mosques::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(data_access)?,
            None => None,
        };

        Ok(Some(UserWithOrganization {
            user: user_to_domain(user),
            company: company.map(company_to_domain),
            mosque: mosque.map(mosque_to_domain),
        }))
    }

    async fn list_members(&self, query: &MemberQuery) -> Result<Vec<MemberRecord>, AdminError> {
        let select = member_select(query);
        let member_ids = select
            .clone()
            .select_only()
            .column(users::Column::Id)
            .into_query();

        let users = select
            .order_by_asc(users::Column::FullName)
            .all(&self.db)
            .await
            .map_err(data_access)?;

        tracing::debug!(
            scope = query.scope.kind(),
            count = users.len(),
            "Loaded scoped members"
        );

        if users.is_empty() {
            return Ok(Vec::new());
        }

        let (progress, assessments, scenarios, achievements) =
            self.load_children(member_ids).await.map_err(data_access)?;

        let mut progress = group_by_user(progress, |m| m.user_id, progress_to_domain);
        let mut assessments = group_by_user(assessments, |m| m.user_id, assessment_to_domain);
        let mut scenarios = group_by_user(scenarios, |m| m.user_id, scenario_to_domain);
        let mut achievements = group_by_user(achievements, |m| m.user_id, achievement_to_domain);

        Ok(users
            .into_iter()
            .map(|user| {
                let id = user.id;
                MemberRecord {
                    user: user_to_domain(user),
                    progress_items: progress.remove(&id).unwrap_or_default(),
                    assessments: assessments.remove(&id).unwrap_or_default(),
                    scenario_results: scenarios.remove(&id).unwrap_or_default(),
                    achievements: achievements.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }
}

fn data_access(err: DbErr) -> AdminError {
    tracing::error!(error = %err, "Admin query failed");
    AdminError::data_access(err.to_string())
}

/// Lower-cased `%term%` with LIKE wildcards escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn group_by_user<M, T>(
    models: Vec<M>,
    user_id: impl Fn(&M) -> Uuid,
    convert: impl Fn(M) -> T,
) -> HashMap<Uuid, Vec<T>> {
    let mut grouped: HashMap<Uuid, Vec<T>> = HashMap::new();
    for model in models {
        grouped.entry(user_id(&model)).or_default().push(convert(model));
    }
    grouped
}

/// Convert domain role to database enum.
const fn to_db_role(role: LearnerRole) -> DbLearnerRole {
    match role {
        LearnerRole::MosqueGuard => DbLearnerRole::MosqueGuard,
        LearnerRole::TourGuide => DbLearnerRole::TourGuide,
        LearnerRole::BusinessProfessional => DbLearnerRole::BusinessProfessional,
        LearnerRole::Student => DbLearnerRole::Student,
        LearnerRole::Admin => DbLearnerRole::Admin,
    }
}

/// Convert database role to domain enum.
const fn from_db_role(role: DbLearnerRole) -> LearnerRole {
    match role {
        DbLearnerRole::MosqueGuard => LearnerRole::MosqueGuard,
        DbLearnerRole::TourGuide => LearnerRole::TourGuide,
        DbLearnerRole::BusinessProfessional => LearnerRole::BusinessProfessional,
        DbLearnerRole::Student => LearnerRole::Student,
        DbLearnerRole::Admin => LearnerRole::Admin,
    }
}

/// Reads a jsonb array of strings, skipping anything else.
fn string_list(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn user_to_domain(model: users::Model) -> UserRecord {
    UserRecord {
        id: UserId::from_uuid(model.id),
        strengths: string_list(&model.strengths),
        recommendations: string_list(&model.recommendations),
        email: model.email,
        full_name: model.full_name,
        role: from_db_role(model.role),
        company_id: model.company_id.map(CompanyId::from_uuid),
        mosque_id: model.mosque_id.map(MosqueId::from_uuid),
        is_org_admin: model.is_org_admin,
        is_super_admin: model.is_super_admin,
        is_active: model.is_active,
        department: model.department,
        specialization: model.specialization,
        proficiency_level: model.proficiency_level,
        assessment_score: model.assessment_score,
        assessment_completed: model.assessment_completed,
        total_challenges_completed: model.total_challenges_completed,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn company_to_domain(model: companies::Model) -> CompanyRecord {
    CompanyRecord {
        id: CompanyId::from_uuid(model.id),
        name: model.name,
        industry: model.industry,
        license_count: model.license_count,
    }
}

fn mosque_to_domain(model: mosques::Model) -> MosqueRecord {
    MosqueRecord {
        id: MosqueId::from_uuid(model.id),
        name: model.name,
        location: model.location,
        license_count: model.license_count,
    }
}

fn progress_to_domain(model: learning_progress::Model) -> ProgressItem {
    ProgressItem {
        module_key: model.module_key,
        completed: model.completed,
    }
}

fn assessment_to_domain(model: assessments::Model) -> AssessmentRecord {
    AssessmentRecord {
        score: model.score,
        completed_at: model.completed_at.with_timezone(&Utc),
    }
}

fn scenario_to_domain(model: scenario_results::Model) -> ScenarioResult {
    ScenarioResult {
        scenario_key: model.scenario_key,
        cultural_score: model.cultural_score,
        completed_at: model.completed_at.with_timezone(&Utc),
    }
}

fn achievement_to_domain(model: achievements::Model) -> Achievement {
    Achievement {
        achievement_key: model.achievement_key,
        earned_at: model.earned_at.with_timezone(&Utc),
    }
}
