//! # Alumnet Shared Library
//!
//! This crate contains the data layer shared by the Alumnet API server:
//! the SQLite connection handling, schema setup, demo-data seeder, and the
//! row models for users, mentors, jobs, and notifications.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool, schema creation, and seeding
//! - `models`: Row models and their query operations

pub mod db;
pub mod models;

/// Current version of the Alumnet shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
