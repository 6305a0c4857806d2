//! Entity re-exports.

pub use super::achievements::Entity as Achievements;
pub use super::assessments::Entity as Assessments;
pub use super::companies::Entity as Companies;
pub use super::learning_progress::Entity as LearningProgress;
pub use super::mosques::Entity as Mosques;
pub use super::scenario_results::Entity as ScenarioResults;
pub use super::users::Entity as Users;
