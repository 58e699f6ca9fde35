//! Core persistence logic for the food advisor.
//! This crate is the single source of truth for catalogue invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::food::{Food, FoodId, FoodValidationError, Questionary};
pub use repo::food_repo::{FoodRepository, RepoError, RepoResult, SqliteFoodRepository};
pub use service::food_service::FoodService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
