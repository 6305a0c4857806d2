//! Initial database migration.
//!
//! Creates the role enum, the organization and user tables, and the
//! learning-activity tables the admin dashboard reads.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ORGANIZATIONS
        // ============================================================
        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(MOSQUES_SQL).await?;

        // ============================================================
        // PART 3: USERS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 4: LEARNING ACTIVITY
        // ============================================================
        db.execute_unprepared(LEARNING_PROGRESS_SQL).await?;
        db.execute_unprepared(ASSESSMENTS_SQL).await?;
        db.execute_unprepared(SCENARIO_RESULTS_SQL).await?;
        db.execute_unprepared(ACHIEVEMENTS_SQL).await?;

        // ============================================================
        // PART 5: TRIGGERS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Learner roles
CREATE TYPE learner_role AS ENUM (
    'mosque_guard',
    'tour_guide',
    'business_professional',
    'student',
    'admin'
);
";

const COMPANIES_SQL: &str = r"
CREATE TABLE companies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    industry VARCHAR(100),
    license_count INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_company_licenses CHECK (license_count >= 0)
);
";

const MOSQUES_SQL: &str = r"
CREATE TABLE mosques (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    location VARCHAR(255),
    license_count INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_mosque_licenses CHECK (license_count >= 0)
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    full_name VARCHAR(255) NOT NULL,
    role learner_role NOT NULL DEFAULT 'student',
    company_id UUID REFERENCES companies(id) ON DELETE SET NULL,
    mosque_id UUID REFERENCES mosques(id) ON DELETE SET NULL,
    is_org_admin BOOLEAN NOT NULL DEFAULT false,
    is_super_admin BOOLEAN NOT NULL DEFAULT false,
    is_active BOOLEAN NOT NULL DEFAULT true,
    department VARCHAR(100),
    specialization VARCHAR(100),
    proficiency_level VARCHAR(50),
    assessment_score INTEGER,
    assessment_completed BOOLEAN NOT NULL DEFAULT false,
    total_challenges_completed INTEGER NOT NULL DEFAULT 0,
    strengths JSONB NOT NULL DEFAULT '[]',
    recommendations JSONB NOT NULL DEFAULT '[]',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    -- A user belongs to at most one organization
    CONSTRAINT chk_single_organization CHECK (company_id IS NULL OR mosque_id IS NULL),
    CONSTRAINT chk_assessment_score CHECK (assessment_score IS NULL OR assessment_score BETWEEN 0 AND 100),
    CONSTRAINT chk_challenges CHECK (total_challenges_completed >= 0)
);

CREATE INDEX idx_users_company ON users(company_id) WHERE company_id IS NOT NULL;
CREATE INDEX idx_users_mosque ON users(mosque_id) WHERE mosque_id IS NOT NULL;
CREATE INDEX idx_users_full_name ON users(lower(full_name));
";

const LEARNING_PROGRESS_SQL: &str = r"
CREATE TABLE learning_progress (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    module_key VARCHAR(100) NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT false,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (user_id, module_key)
);
";

const ASSESSMENTS_SQL: &str = r"
CREATE TABLE assessments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    score INTEGER NOT NULL,
    completed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_score CHECK (score BETWEEN 0 AND 100)
);

CREATE INDEX idx_assessments_user ON assessments(user_id, completed_at DESC);
";

const SCENARIO_RESULTS_SQL: &str = r"
CREATE TABLE scenario_results (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    scenario_key VARCHAR(100) NOT NULL,
    cultural_score INTEGER,
    completed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_cultural_score CHECK (cultural_score IS NULL OR cultural_score BETWEEN 0 AND 100)
);

CREATE INDEX idx_scenario_results_user ON scenario_results(user_id);
";

const ACHIEVEMENTS_SQL: &str = r"
CREATE TABLE achievements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    achievement_key VARCHAR(100) NOT NULL,
    earned_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (user_id, achievement_key)
);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION touch_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_users_updated_at
    BEFORE UPDATE ON users
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();

CREATE TRIGGER trg_companies_updated_at
    BEFORE UPDATE ON companies
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();

CREATE TRIGGER trg_mosques_updated_at
    BEFORE UPDATE ON mosques
    FOR EACH ROW EXECUTE FUNCTION touch_updated_at();
";

const DROP_ALL_SQL: &str = r"
-- ============================================================
-- DROP ALL: Rollback migration
-- Order matters due to foreign key constraints
-- ============================================================

DROP TRIGGER IF EXISTS trg_mosques_updated_at ON mosques;
DROP TRIGGER IF EXISTS trg_companies_updated_at ON companies;
DROP TRIGGER IF EXISTS trg_users_updated_at ON users;
DROP FUNCTION IF EXISTS touch_updated_at();

DROP TABLE IF EXISTS achievements CASCADE;
DROP TABLE IF EXISTS scenario_results CASCADE;
DROP TABLE IF EXISTS assessments CASCADE;
DROP TABLE IF EXISTS learning_progress CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TABLE IF EXISTS mosques CASCADE;
DROP TABLE IF EXISTS companies CASCADE;

DROP TYPE IF EXISTS learner_role;
";
