//! Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `learner_role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "learner_role")]
pub enum LearnerRole {
    #[sea_orm(string_value = "mosque_guard")]
    MosqueGuard,
    #[sea_orm(string_value = "tour_guide")]
    TourGuide,
    #[sea_orm(string_value = "business_professional")]
    BusinessProfessional,
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "admin")]
    Admin,
}
