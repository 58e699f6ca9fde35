//! Food domain model.
//!
//! # Responsibility
//! - Define the persisted `Food` entity and the `Questionary` criteria value.
//! - Provide the minute/microsecond cook-time conversion used by storage.
//!
//! # Invariants
//! - All `Food` fields are required once persisted; validation runs before
//!   every SQL mutation.
//! - Integer-minute cook times round-trip through microseconds with no loss.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted food row.
///
/// Assigned by the store on insert; kept as a type alias to make semantic
/// intent explicit in signatures.
pub type FoodId = i64;

/// Microseconds per whole minute, the unit the `cooktime` column stores.
pub const MICROS_PER_MINUTE: i64 = 60 * 1_000_000;

/// Canonical persisted record for one dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Store-assigned row id. Ignored on create.
    pub id: FoodId,
    /// Display name of the dish.
    pub name: String,
    /// Preparation time in whole minutes. Stored as microseconds.
    pub cook_time_min: i32,
    /// Price in the smallest currency unit.
    pub price: i32,
    /// Meal category, e.g. `breakfast` / `lunch` / `dinner`.
    pub meal_type: String,
    /// Dish category, e.g. `soup` / `salad` / `dessert`.
    pub dish_type: String,
}

/// Transient bundle of optional search constraints.
///
/// Absent fields impose no constraint; present fields combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Questionary {
    /// Upper bound on cook time, in whole minutes.
    pub max_cook_time_min: Option<i32>,
    /// Upper bound on price.
    pub max_price: Option<i32>,
    /// Exact meal category match.
    pub meal_type: Option<String>,
    /// Exact dish category match.
    pub dish_type: Option<String>,
}

/// Validation failure raised before any write reaches SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodValidationError {
    EmptyName,
    EmptyMealType,
    EmptyDishType,
    NegativeCookTime(i32),
    NegativePrice(i32),
}

impl Display for FoodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "food name must not be empty"),
            Self::EmptyMealType => write!(f, "food meal type must not be empty"),
            Self::EmptyDishType => write!(f, "food dish type must not be empty"),
            Self::NegativeCookTime(minutes) => {
                write!(f, "food cook time must not be negative, got {minutes}")
            }
            Self::NegativePrice(price) => {
                write!(f, "food price must not be negative, got {price}")
            }
        }
    }
}

impl Error for FoodValidationError {}

impl Food {
    /// Creates an unpersisted food with `id = 0`.
    ///
    /// The id field is a placeholder until the store assigns one on create.
    pub fn new(
        name: impl Into<String>,
        cook_time_min: i32,
        price: i32,
        meal_type: impl Into<String>,
        dish_type: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            cook_time_min,
            price,
            meal_type: meal_type.into(),
            dish_type: dish_type.into(),
        }
    }

    /// Checks field-level invariants required before persistence.
    ///
    /// # Errors
    /// - Empty name, meal type or dish type.
    /// - Negative cook time or price.
    pub fn validate(&self) -> Result<(), FoodValidationError> {
        if self.name.trim().is_empty() {
            return Err(FoodValidationError::EmptyName);
        }
        if self.meal_type.trim().is_empty() {
            return Err(FoodValidationError::EmptyMealType);
        }
        if self.dish_type.trim().is_empty() {
            return Err(FoodValidationError::EmptyDishType);
        }
        if self.cook_time_min < 0 {
            return Err(FoodValidationError::NegativeCookTime(self.cook_time_min));
        }
        if self.price < 0 {
            return Err(FoodValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}

impl Questionary {
    /// Returns whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.max_cook_time_min.is_none()
            && self.max_price.is_none()
            && self.meal_type.is_none()
            && self.dish_type.is_none()
    }
}

/// Converts whole minutes to the microsecond value stored in `cooktime`.
pub fn minutes_to_micros(minutes: i32) -> i64 {
    i64::from(minutes) * MICROS_PER_MINUTE
}

/// Converts a stored microsecond value back to whole minutes.
///
/// Returns `None` when the value is negative or not a whole number of
/// minutes; such a value cannot have been written by this crate.
pub fn micros_to_minutes(micros: i64) -> Option<i32> {
    if micros < 0 || micros % MICROS_PER_MINUTE != 0 {
        return None;
    }
    i32::try_from(micros / MICROS_PER_MINUTE).ok()
}

#[cfg(test)]
mod tests {
    use super::{micros_to_minutes, minutes_to_micros, MICROS_PER_MINUTE};

    #[test]
    fn whole_minutes_round_trip_exactly() {
        for minutes in [0, 1, 10, 20, 30, 90, i32::MAX] {
            let micros = minutes_to_micros(minutes);
            assert_eq!(micros_to_minutes(micros), Some(minutes));
        }
    }

    #[test]
    fn partial_minutes_are_rejected_on_read() {
        assert_eq!(micros_to_minutes(MICROS_PER_MINUTE + 1), None);
        assert_eq!(micros_to_minutes(-MICROS_PER_MINUTE), None);
    }
}
