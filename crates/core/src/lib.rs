//! Core business logic for Lisan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Admin scoping, member enrichment and cohort analytics live here; storage is
//! reached through the [`admin::AdminStore`] trait.

pub mod admin;
