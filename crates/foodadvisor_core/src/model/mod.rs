//! Domain model for the food catalogue.
//!
//! # Responsibility
//! - Define the canonical `Food` record and the transient search criteria.
//! - Own field-level validation applied on every write path.
//!
//! # Invariants
//! - Every persisted food is identified by a store-assigned `FoodId`.
//! - Cook time is whole minutes at the model boundary and microseconds at
//!   the storage boundary, with exact conversion between the two.

pub mod food;
