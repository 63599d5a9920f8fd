use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::categories::categories_model::{Category, NewCategory, UpdateCategory};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;

/// Service for managing categories
pub struct CategoryService<T: CategoryRepositoryTrait> {
    category_repo: Arc<T>,
}

impl<T: CategoryRepositoryTrait> CategoryService<T> {
    pub fn new(category_repo: Arc<T>) -> Self {
        CategoryService { category_repo }
    }
}

#[async_trait]
impl<T: CategoryRepositoryTrait + Send + Sync> CategoryServiceTrait for CategoryService<T> {
    fn get_categories(&self) -> Result<Vec<Category>> {
        self.category_repo.get_all_categories()
    }

    fn get_category(&self, id: &str) -> Result<Option<Category>> {
        self.category_repo.get_category_by_id(id)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        debug!("Creating category: {}", new_category.name);
        self.category_repo.create_category(new_category)
    }

    async fn update_category(&self, id: &str, update: UpdateCategory) -> Result<Category> {
        self.category_repo.update_category(id, update)
    }

    async fn delete_category(&self, id: &str) -> Result<()> {
        self.category_repo.delete_category(id)
    }
}
