//! Food use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD and recommendation entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::food::{Food, FoodId, Questionary};
use crate::repo::food_repo::{FoodRepository, RepoResult};

/// Use-case service wrapper for food CRUD and criteria search.
pub struct FoodService<R: FoodRepository> {
    repo: R,
}

impl<R: FoodRepository> FoodService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new food through repository persistence.
    pub fn create_food(&self, food: &Food) -> RepoResult<FoodId> {
        self.repo.create_food(food)
    }

    /// Fetches one food by id.
    pub fn get_food(&self, id: FoodId) -> RepoResult<Food> {
        self.repo.get_food(id)
    }

    /// Overwrites an existing food record.
    pub fn update_food(&self, food: &Food) -> RepoResult<()> {
        self.repo.update_food(food)
    }

    /// Removes a food record by id.
    pub fn delete_food(&self, id: FoodId) -> RepoResult<()> {
        self.repo.delete_food(id)
    }

    /// Returns all foods matching every present questionary criterion.
    ///
    /// # Contract
    /// - An empty questionary returns the whole catalogue.
    /// - No matching rows is an empty list, not an error.
    pub fn recommend(&self, questionary: &Questionary) -> RepoResult<Vec<Food>> {
        self.repo.search_foods(questionary)
    }
}
