//! Property-based tests for scoping and aggregation.
//!
//! - Derived percentages stay in 0..=100
//! - Department stats partition the member list
//! - Super-admin precedence and scope exclusivity

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use super::analytics::AnalyticsSummarizer;
use super::employees::{derive_cultural_score, derive_progress, enrich};
use super::resolver::build_context;
use super::scope::AdminScope;
use super::test_support::{company, mosque, user};
use super::types::{
    LearnerRole, MemberRecord, ProgressItem, ScenarioResult, UserWithOrganization,
};

fn role_strategy() -> impl Strategy<Value = LearnerRole> {
    prop_oneof![
        Just(LearnerRole::MosqueGuard),
        Just(LearnerRole::TourGuide),
        Just(LearnerRole::BusinessProfessional),
        Just(LearnerRole::Student),
    ]
}

fn specialization_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("hospitality".to_string())),
        Just(Some("management".to_string())),
        Just(Some("retail".to_string())),
    ]
}

fn progress_items() -> impl Strategy<Value = Vec<ProgressItem>> {
    prop::collection::vec(any::<bool>(), 0..12).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, completed)| ProgressItem {
                module_key: format!("module-{i}"),
                completed,
            })
            .collect()
    })
}

fn scenario_results() -> impl Strategy<Value = Vec<ScenarioResult>> {
    prop::collection::vec(prop::option::of(-50i32..200), 0..8).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, cultural_score)| ScenarioResult {
                scenario_key: format!("scenario-{i}"),
                cultural_score,
                completed_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            })
            .collect()
    })
}

prop_compose! {
    fn member()(
        role in role_strategy(),
        specialization in specialization_strategy(),
        assessment_completed in any::<bool>(),
        challenges in -5i32..60,
        assessment_score in prop::option::of(-20i32..150),
        items in progress_items(),
        results in scenario_results(),
    ) -> MemberRecord {
        let mut learner = user("Learner");
        learner.role = role;
        learner.specialization = specialization;
        learner.assessment_completed = assessment_completed;
        learner.total_challenges_completed = challenges;
        learner.assessment_score = assessment_score;
        MemberRecord {
            progress_items: items,
            scenario_results: results,
            ..MemberRecord::bare(learner)
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_progress_is_a_percentage(
        assessment_completed in any::<bool>(),
        challenges in any::<i32>(),
        items in progress_items(),
    ) {
        let progress = derive_progress(assessment_completed, challenges, &items);
        prop_assert!(progress <= 100);
    }

    #[test]
    fn prop_cultural_score_is_a_percentage(
        results in scenario_results(),
        assessment_score in prop::option::of(any::<i32>()),
    ) {
        let score = derive_cultural_score(&results, assessment_score);
        prop_assert!(score <= 100);
    }

    #[test]
    fn prop_departments_partition_members(members in prop::collection::vec(member(), 0..25)) {
        let org = mosque();
        let mut admin = user("Admin");
        admin.is_org_admin = true;
        admin.mosque_id = Some(org.id);
        let context = build_context(UserWithOrganization {
            user: admin,
            company: None,
            mosque: Some(org),
        }).unwrap();

        let employees: Vec<_> = members.into_iter().map(enrich).collect();
        let snapshot = AnalyticsSummarizer::default().summarize(&employees, &context);

        let total: usize = snapshot.department_stats.values().map(|d| d.total).sum();
        let completed: usize = snapshot.department_stats.values().map(|d| d.completed).sum();
        prop_assert_eq!(total, employees.len());
        prop_assert_eq!(completed, snapshot.completed_employees);
        for employee in &employees {
            prop_assert!(snapshot.department_stats.contains_key(&employee.department));
        }
    }

    #[test]
    fn prop_super_admin_is_always_global(
        is_org_admin in any::<bool>(),
        with_company in any::<bool>(),
        with_mosque in any::<bool>(),
    ) {
        let company = company(Some("tourism"));
        let mosque = mosque();
        let mut admin = user("Root");
        admin.is_super_admin = true;
        admin.is_org_admin = is_org_admin;
        admin.company_id = with_company.then_some(company.id);
        admin.mosque_id = with_mosque.then_some(mosque.id);

        let context = build_context(UserWithOrganization {
            user: admin,
            company: with_company.then_some(company),
            mosque: with_mosque.then_some(mosque),
        }).unwrap();

        prop_assert_eq!(context.scope, AdminScope::Global);
        prop_assert!(context.organization.is_none());
        prop_assert!(context.permissions.can_manage_billing);
    }

    #[test]
    fn prop_org_admin_gets_exactly_one_scope(
        with_company in any::<bool>(),
        with_mosque in any::<bool>(),
    ) {
        let company = company(None);
        let mosque = mosque();
        let mut admin = user("Admin");
        admin.is_org_admin = true;
        admin.company_id = with_company.then_some(company.id);
        admin.mosque_id = with_mosque.then_some(mosque.id);

        let result = build_context(UserWithOrganization {
            user: admin,
            company: Some(company),
            mosque: Some(mosque),
        });

        match (with_company, with_mosque) {
            (false, false) => prop_assert!(result.is_err()),
            (true, _) => {
                let scope = result.unwrap().scope;
                let is_company = matches!(scope, AdminScope::Company { .. });
                prop_assert!(is_company);
            }
            (false, true) => {
                let scope = result.unwrap().scope;
                let is_mosque = matches!(scope, AdminScope::Mosque { .. });
                prop_assert!(is_mosque);
            }
        }
    }
}
