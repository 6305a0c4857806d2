//! `SeaORM` entity definitions.

pub mod prelude;

pub mod achievements;
pub mod assessments;
pub mod companies;
pub mod learning_progress;
pub mod mosques;
pub mod scenario_results;
pub mod sea_orm_active_enums;
pub mod users;
