use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Asset category. Owns the economic age used by the depreciation engine.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub economic_age_months: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Assets in this category depreciate only when the economic age is set.
    pub fn is_depreciable(&self) -> bool {
        self.economic_age_months > 0
    }
}

/// Input model for creating a new category
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub economic_age_months: i32,
}

impl NewCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.economic_age_months < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Economic age cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a category
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub economic_age_months: Option<i32>,
}

impl UpdateCategory {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Category name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(age) = self.economic_age_months {
            if age < 0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Economic age cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}
