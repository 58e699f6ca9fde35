//! Food repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `food` table.
//! - Build the conjunctive search filter from optional questionary criteria.
//!
//! # Invariants
//! - Write paths must call `Food::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - The search cook-time predicate uses the same minute/microsecond
//!   conversion as the write paths.

use crate::db::DbError;
use crate::model::food::{
    micros_to_minutes, minutes_to_micros, Food, FoodId, FoodValidationError, Questionary,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FOOD_SELECT_SQL: &str = "SELECT
    id,
    name,
    cooktime,
    price,
    mealtype,
    dishtype
FROM food";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for food persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(FoodValidationError),
    Db(DbError),
    NotFound(FoodId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "food not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted food data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<FoodValidationError> for RepoError {
    fn from(value: FoodValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for food CRUD and criteria search.
pub trait FoodRepository {
    /// Inserts one food and returns the store-assigned id. Input id ignored.
    fn create_food(&self, food: &Food) -> RepoResult<FoodId>;
    /// Fetches one food by id; `NotFound` when the row is absent.
    fn get_food(&self, id: FoodId) -> RepoResult<Food>;
    /// Overwrites all non-id columns for `food.id`; no-op when absent.
    fn update_food(&self, food: &Food) -> RepoResult<()>;
    /// Removes the row matching id; no-op when absent.
    fn delete_food(&self, id: FoodId) -> RepoResult<()>;
    /// Returns all foods satisfying every present questionary criterion.
    fn search_foods(&self, questionary: &Questionary) -> RepoResult<Vec<Food>>;
}

/// SQLite-backed food repository over an externally-supplied connection.
pub struct SqliteFoodRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFoodRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FoodRepository for SqliteFoodRepository<'_> {
    fn create_food(&self, food: &Food) -> RepoResult<FoodId> {
        food.validate()?;

        self.conn.execute(
            "INSERT INTO food (
                name,
                cooktime,
                price,
                mealtype,
                dishtype
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                food.name.as_str(),
                minutes_to_micros(food.cook_time_min),
                food.price,
                food.meal_type.as_str(),
                food.dish_type.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_food(&self, id: FoodId) -> RepoResult<Food> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FOOD_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_food_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn update_food(&self, food: &Food) -> RepoResult<()> {
        food.validate()?;

        // Matching zero rows is a successful no-op; callers that need
        // existence semantics use get_food first.
        self.conn.execute(
            "UPDATE food
             SET
                name = ?1,
                cooktime = ?2,
                price = ?3,
                mealtype = ?4,
                dishtype = ?5
             WHERE id = ?6;",
            params![
                food.name.as_str(),
                minutes_to_micros(food.cook_time_min),
                food.price,
                food.meal_type.as_str(),
                food.dish_type.as_str(),
                food.id,
            ],
        )?;

        Ok(())
    }

    fn delete_food(&self, id: FoodId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM food WHERE id = ?1;", params![id])?;
        Ok(())
    }

    fn search_foods(&self, questionary: &Questionary) -> RepoResult<Vec<Food>> {
        let predicates = criteria_predicates(questionary);

        let mut sql = String::from(FOOD_SELECT_SQL);
        let mut bind_values: Vec<Value> = Vec::with_capacity(predicates.len());

        for (column, operator, value) in predicates {
            sql.push_str(if bind_values.is_empty() {
                " WHERE "
            } else {
                " AND "
            });
            sql.push_str(column);
            sql.push(' ');
            sql.push_str(operator);
            sql.push_str(" ?");
            bind_values.push(value);
        }

        sql.push_str(" ORDER BY id ASC;");
        log::debug!(
            "event=food_search module=repo predicates={} sql={sql}",
            bind_values.len()
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut foods = Vec::new();

        while let Some(row) = rows.next()? {
            foods.push(parse_food_row(row)?);
        }

        Ok(foods)
    }
}

/// Maps present questionary criteria to `(column, operator, value)` triples.
///
/// Numeric thresholds use `<=`, categorical matches use `=`. The list length
/// varies from zero to four depending on which criteria are set.
fn criteria_predicates(questionary: &Questionary) -> Vec<(&'static str, &'static str, Value)> {
    let mut predicates = Vec::new();

    if let Some(minutes) = questionary.max_cook_time_min {
        predicates.push(("cooktime", "<=", Value::Integer(minutes_to_micros(minutes))));
    }
    if let Some(price) = questionary.max_price {
        predicates.push(("price", "<=", Value::Integer(i64::from(price))));
    }
    if let Some(meal_type) = &questionary.meal_type {
        predicates.push(("mealtype", "=", Value::Text(meal_type.clone())));
    }
    if let Some(dish_type) = &questionary.dish_type {
        predicates.push(("dishtype", "=", Value::Text(dish_type.clone())));
    }

    predicates
}

fn parse_food_row(row: &Row<'_>) -> RepoResult<Food> {
    let cooktime_micros: i64 = row.get("cooktime")?;
    let cook_time_min = micros_to_minutes(cooktime_micros).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "cooktime value `{cooktime_micros}` in food.cooktime is not a whole minute count"
        ))
    })?;

    Ok(Food {
        id: row.get("id")?,
        name: row.get("name")?,
        cook_time_min,
        price: row.get("price")?,
        meal_type: row.get("mealtype")?,
        dish_type: row.get("dishtype")?,
    })
}
