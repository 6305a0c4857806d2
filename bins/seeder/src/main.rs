//! Database seeder for Lisan development and demos.
//!
//! Seeds one tourism company, one mosque, a platform admin, one admin per
//! organization, and a handful of learners with progress, assessments,
//! scenario results and achievements. Learner names are generated from a
//! fixed seed, so repeated runs produce the same data.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::name::en::Name;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use lisan_db::entities::{
    achievements, assessments, companies, learning_progress, mosques, scenario_results,
    sea_orm_active_enums::LearnerRole, users,
};

const COMPANY_ID: Uuid = Uuid::from_u128(0x1000);
const MOSQUE_ID: Uuid = Uuid::from_u128(0x2000);
const SUPER_ADMIN_ID: Uuid = Uuid::from_u128(0x3000);
const COMPANY_ADMIN_ID: Uuid = Uuid::from_u128(0x3001);
const MOSQUE_ADMIN_ID: Uuid = Uuid::from_u128(0x3002);
/// Learner `i` gets id `LEARNER_BASE + i`; its child rows are derived from it.
const LEARNER_BASE: u128 = 0x4000;
const NAME_SEED: u64 = 2026;
const MODULES: [&str; 8] = [
    "greetings",
    "numbers",
    "directions",
    "mosque-etiquette",
    "prayer-times",
    "hospitality",
    "history",
    "small-talk",
];

#[derive(Clone, Copy)]
enum Org {
    Company,
    Mosque,
}

struct LearnerSeed {
    org: Org,
    role: LearnerRole,
    specialization: Option<&'static str>,
    department: Option<&'static str>,
    assessment_score: Option<i32>,
    challenges: i32,
    modules_done: usize,
    scenario_scores: &'static [Option<i32>],
    achievements: &'static [&'static str],
}

const LEARNERS: [LearnerSeed; 6] = [
    LearnerSeed {
        org: Org::Company,
        role: LearnerRole::TourGuide,
        specialization: None,
        department: None,
        assessment_score: Some(82),
        challenges: 12,
        modules_done: 6,
        scenario_scores: &[Some(88), Some(79), None],
        achievements: &["first-lesson", "week-streak"],
    },
    LearnerSeed {
        org: Org::Company,
        role: LearnerRole::BusinessProfessional,
        specialization: Some("hospitality"),
        department: None,
        assessment_score: Some(64),
        challenges: 20,
        modules_done: 8,
        scenario_scores: &[Some(92)],
        achievements: &["first-lesson", "course-complete"],
    },
    LearnerSeed {
        org: Org::Company,
        role: LearnerRole::BusinessProfessional,
        specialization: Some("management"),
        department: None,
        assessment_score: None,
        challenges: 0,
        modules_done: 2,
        scenario_scores: &[],
        achievements: &[],
    },
    LearnerSeed {
        org: Org::Mosque,
        role: LearnerRole::MosqueGuard,
        specialization: None,
        department: None,
        assessment_score: Some(71),
        challenges: 5,
        modules_done: 3,
        scenario_scores: &[Some(70), Some(65)],
        achievements: &["first-lesson"],
    },
    LearnerSeed {
        org: Org::Mosque,
        role: LearnerRole::MosqueGuard,
        specialization: None,
        department: Some("Visitor Services"),
        assessment_score: Some(90),
        challenges: 25,
        modules_done: 8,
        scenario_scores: &[Some(95), Some(91), Some(89)],
        achievements: &["first-lesson", "week-streak", "course-complete"],
    },
    LearnerSeed {
        org: Org::Mosque,
        role: LearnerRole::Student,
        specialization: None,
        department: None,
        assessment_score: None,
        challenges: 0,
        modules_done: 0,
        scenario_scores: &[],
        achievements: &[],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

    println!("Connecting to database...");
    let db = lisan_db::connect(&database_url).await?;

    if users::Entity::find_by_id(SUPER_ADMIN_ID)
        .one(&db)
        .await?
        .is_some()
    {
        println!("Seed data already present, skipping.");
        return Ok(());
    }

    println!("Seeding organizations...");
    seed_organizations(&db).await?;

    println!("Seeding admins...");
    seed_admins(&db).await?;

    println!("Seeding learners...");
    seed_learners(&db).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_organizations(db: &DatabaseConnection) -> anyhow::Result<()> {
    let now = Utc::now().into();

    companies::ActiveModel {
        id: Set(COMPANY_ID),
        name: Set("Bosphorus Heritage Tours".to_string()),
        industry: Set(Some("tourism".to_string())),
        license_count: Set(25),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    println!("  Created company: Bosphorus Heritage Tours");

    mosques::ActiveModel {
        id: Set(MOSQUE_ID),
        name: Set("Sultan Ahmed Mosque".to_string()),
        location: Set(Some("Istanbul".to_string())),
        license_count: Set(10),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    println!("  Created mosque: Sultan Ahmed Mosque");

    Ok(())
}

/// A user row with every optional column empty.
fn blank_user(id: Uuid, email: &str, full_name: &str, role: LearnerRole) -> users::ActiveModel {
    let now = Utc::now().into();
    users::ActiveModel {
        id: Set(id),
        email: Set(email.to_string()),
        full_name: Set(full_name.to_string()),
        role: Set(role),
        company_id: Set(None),
        mosque_id: Set(None),
        is_org_admin: Set(false),
        is_super_admin: Set(false),
        is_active: Set(true),
        department: Set(None),
        specialization: Set(None),
        proficiency_level: Set(None),
        assessment_score: Set(None),
        assessment_completed: Set(false),
        total_challenges_completed: Set(0),
        strengths: Set(serde_json::json!([])),
        recommendations: Set(serde_json::json!([])),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

async fn seed_admins(db: &DatabaseConnection) -> anyhow::Result<()> {
    let mut root = blank_user(
        SUPER_ADMIN_ID,
        "platform@lisan.dev",
        "Platform Admin",
        LearnerRole::Admin,
    );
    root.is_super_admin = Set(true);
    root.insert(db).await?;
    println!("  Created platform admin: platform@lisan.dev");

    let mut company_admin = blank_user(
        COMPANY_ADMIN_ID,
        "admin@bosphorus.example",
        "Company Admin",
        LearnerRole::Admin,
    );
    company_admin.is_org_admin = Set(true);
    company_admin.company_id = Set(Some(COMPANY_ID));
    company_admin.insert(db).await?;
    println!("  Created company admin: admin@bosphorus.example");

    let mut mosque_admin = blank_user(
        MOSQUE_ADMIN_ID,
        "admin@sultanahmed.example",
        "Mosque Admin",
        LearnerRole::Admin,
    );
    mosque_admin.is_org_admin = Set(true);
    mosque_admin.mosque_id = Set(Some(MOSQUE_ID));
    mosque_admin.insert(db).await?;
    println!("  Created mosque admin: admin@sultanahmed.example");

    Ok(())
}

/// Derives a stable child-row id from a learner id.
fn child_id(learner: Uuid, table: u128, index: usize) -> Uuid {
    let offset = u128::try_from(index).unwrap_or(0);
    Uuid::from_u128((learner.as_u128() << 16) | (table << 8) | offset)
}

async fn seed_learners(db: &DatabaseConnection) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(NAME_SEED);
    let now = Utc::now();

    for (index, seed) in LEARNERS.iter().enumerate() {
        let id = Uuid::from_u128(LEARNER_BASE + u128::try_from(index).unwrap_or(0));
        let full_name: String = Name().fake_with_rng(&mut rng);
        let email = format!("learner{}@lisan.dev", index + 1);

        let mut learner = blank_user(id, &email, &full_name, seed.role);
        match seed.org {
            Org::Company => learner.company_id = Set(Some(COMPANY_ID)),
            Org::Mosque => learner.mosque_id = Set(Some(MOSQUE_ID)),
        }
        learner.specialization = Set(seed.specialization.map(str::to_string));
        learner.department = Set(seed.department.map(str::to_string));
        learner.assessment_score = Set(seed.assessment_score);
        learner.assessment_completed = Set(seed.assessment_score.is_some());
        learner.total_challenges_completed = Set(seed.challenges);
        if seed.assessment_score.is_some() {
            learner.proficiency_level = Set(Some("intermediate".to_string()));
            learner.strengths = Set(serde_json::json!(["greetings", "etiquette"]));
            learner.recommendations = Set(serde_json::json!(["practice directions"]));
        }
        learner.insert(db).await?;

        let progress: Vec<_> = MODULES
            .iter()
            .enumerate()
            .map(|(i, module)| learning_progress::ActiveModel {
                id: Set(child_id(id, 1, i)),
                user_id: Set(id),
                module_key: Set((*module).to_string()),
                completed: Set(i < seed.modules_done),
                updated_at: Set(now.into()),
            })
            .collect();
        learning_progress::Entity::insert_many(progress).exec(db).await?;

        if let Some(score) = seed.assessment_score {
            assessments::ActiveModel {
                id: Set(child_id(id, 2, 0)),
                user_id: Set(id),
                score: Set(score),
                completed_at: Set((now - Duration::days(30)).into()),
            }
            .insert(db)
            .await?;
        }

        if !seed.scenario_scores.is_empty() {
            let results: Vec<_> = seed
                .scenario_scores
                .iter()
                .enumerate()
                .map(|(i, score)| scenario_results::ActiveModel {
                    id: Set(child_id(id, 3, i)),
                    user_id: Set(id),
                    scenario_key: Set(format!("scenario-{}", i + 1)),
                    cultural_score: Set(*score),
                    completed_at: Set((now - Duration::days(7)).into()),
                })
                .collect();
            scenario_results::Entity::insert_many(results).exec(db).await?;
        }

        if !seed.achievements.is_empty() {
            let earned: Vec<_> = seed
                .achievements
                .iter()
                .enumerate()
                .map(|(i, key)| achievements::ActiveModel {
                    id: Set(child_id(id, 4, i)),
                    user_id: Set(id),
                    achievement_key: Set((*key).to_string()),
                    earned_at: Set((now - Duration::days(3)).into()),
                })
                .collect();
            achievements::Entity::insert_many(earned).exec(db).await?;
        }

        println!("  Created learner: {full_name} <{email}>");
    }

    Ok(())
}
