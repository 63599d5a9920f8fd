use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::categories::categories_model::{Category, NewCategory, UpdateCategory};
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::db::get_connection;
use crate::errors::{Error, Result, ValidationError};
use crate::schema::{assets, categories};

/// Repository for managing category data in the database
pub struct CategoryRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        CategoryRepository { pool }
    }
}

impl CategoryRepositoryTrait for CategoryRepository {
    fn get_all_categories(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .filter(categories::deleted_at.is_null())
            .order(categories::name.asc())
            .load::<Category>(&mut conn)?)
    }

    fn get_category_by_id(&self, id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .find(id)
            .filter(categories::deleted_at.is_null())
            .first::<Category>(&mut conn)
            .optional()?)
    }

    fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        let mut conn = get_connection(&self.pool)?;

        let now = Utc::now().naive_utc();
        let id = new_category
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let code = new_category
            .code
            .unwrap_or_else(|| format!("CAT-{}", &id[..8].to_uppercase()));

        let category = Category {
            id,
            code,
            name: new_category.name,
            description: new_category.description,
            economic_age_months: new_category.economic_age_months,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let result = diesel::insert_into(categories::table)
            .values(&category)
            .get_result::<Category>(&mut conn)?;

        Ok(result)
    }

    fn update_category(&self, id: &str, update: UpdateCategory) -> Result<Category> {
        update.validate()?;
        let mut conn = get_connection(&self.pool)?;

        let mut category = categories::table
            .find(id)
            .filter(categories::deleted_at.is_null())
            .first::<Category>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::Category(format!("Category not found: {}", id)))?;

        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(description) = update.description {
            category.description = Some(description);
        }
        if let Some(age) = update.economic_age_months {
            category.economic_age_months = age;
        }
        category.updated_at = Utc::now().naive_utc();

        let result = diesel::update(categories::table.find(id))
            .set(&category)
            .get_result::<Category>(&mut conn)?;

        Ok(result)
    }

    fn delete_category(&self, id: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let asset_count: i64 = assets::table
            .filter(assets::category_id.eq(id))
            .filter(assets::deleted_at.is_null())
            .count()
            .get_result(&mut conn)?;

        if asset_count > 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Cannot delete category: {} assets are assigned to it",
                asset_count
            ))));
        }

        diesel::update(categories::table.find(id))
            .set(categories::deleted_at.eq(Some(Utc::now().naive_utc())))
            .execute(&mut conn)?;

        Ok(())
    }

    fn count_assets_in_category(&self, category_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(assets::table
            .filter(assets::category_id.eq(category_id))
            .filter(assets::deleted_at.is_null())
            .count()
            .get_result(&mut conn)?)
    }
}
