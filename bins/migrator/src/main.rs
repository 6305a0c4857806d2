//! Database migration runner for Lisan.
//!
//! Reads `DATABASE_URL` from the environment (or `.env`).
//!
//! Usage:
//!   migrator up      - Apply the schema
//!   migrator down    - Roll the schema back
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop everything and re-apply

use lisan_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI installs its own tracing subscriber
    cli::run_cli(Migrator).await;
}
