use crate::categories::categories_model::{Category, NewCategory, UpdateCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Get all non-deleted categories
    fn get_all_categories(&self) -> Result<Vec<Category>>;

    /// Get a non-deleted category by ID
    fn get_category_by_id(&self, id: &str) -> Result<Option<Category>>;

    /// Create a new category
    fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    /// Update a category
    fn update_category(&self, id: &str, update: UpdateCategory) -> Result<Category>;

    /// Soft-delete a category (only if no assets reference it)
    fn delete_category(&self, id: &str) -> Result<()>;

    /// Count non-deleted assets assigned to a category
    fn count_assets_in_category(&self, category_id: &str) -> Result<i64>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self) -> Result<Vec<Category>>;

    fn get_category(&self, id: &str) -> Result<Option<Category>>;

    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    async fn update_category(&self, id: &str, update: UpdateCategory) -> Result<Category>;

    /// Soft-delete a category (fails while assets are assigned to it)
    async fn delete_category(&self, id: &str) -> Result<()>;
}
