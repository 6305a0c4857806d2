//! `SeaORM` Entity for users table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::LearnerRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: String,
    pub role: LearnerRole,
    pub company_id: Option<Uuid>,
    pub mosque_id: Option<Uuid>,
    pub is_org_admin: bool,
    pub is_super_admin: bool,
    pub is_active: bool,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub proficiency_level: Option<String>,
    pub assessment_score: Option<i32>,
    pub assessment_completed: bool,
    pub total_challenges_completed: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub strengths: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub recommendations: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Companies,
    #[sea_orm(
        belongs_to = "super::mosques::Entity",
        from = "Column::MosqueId",
        to = "super::mosques::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Mosques,
    #[sea_orm(has_many = "super::learning_progress::Entity")]
    LearningProgress,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
    #[sea_orm(has_many = "super::scenario_results::Entity")]
    ScenarioResults,
    #[sea_orm(has_many = "super::achievements::Entity")]
    Achievements,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::mosques::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mosques.def()
    }
}

impl Related<super::learning_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningProgress.def()
    }
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl Related<super::scenario_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScenarioResults.def()
    }
}

impl Related<super::achievements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Achievements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
