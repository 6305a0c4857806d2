//! Shared types, errors, and configuration for Lisan.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for users and organizations
//! - Application-wide error types
//! - Configuration management
//! - Bearer-token claims and validation

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::{AnalyticsConfig, AppConfig, DemoModeConfig, ScopeRates};
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
