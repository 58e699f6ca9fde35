//! Use-case services orchestrating repository access.
//!
//! # Responsibility
//! - Provide stable entry points for callers outside the persistence layer.
//! - Keep business orchestration storage-agnostic.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.

pub mod food_service;
