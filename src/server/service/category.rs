use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::{
        category::{Category, CategoryNameParams},
        pagination::Pagination,
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category with a unique name
    pub async fn create(&self, params: CategoryNameParams) -> Result<Category, AppError> {
        debug!(name = %params.name, "creating category");
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Category name '{}' is already in use",
                params.name
            )));
        }

        let category = repo.create(params.name).await?;
        info!(category_id = category.id, "category created");

        Ok(category)
    }

    /// Renames a category
    ///
    /// Keeping the current name is allowed; taking another category's name is a conflict.
    pub async fn update(&self, id: i32, params: CategoryNameParams) -> Result<Category, AppError> {
        debug!(category_id = id, "renaming category");
        let repo = CategoryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with id={} was not found",
                id
            )));
        }

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Category name '{}' is already in use",
                    params.name
                )));
            }
        }

        let category = repo.update(id, params.name).await?;
        info!(category_id = id, "category renamed");

        Ok(category)
    }

    /// Deletes a category that no event references
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        debug!(category_id = id, "deleting category");
        let repo = CategoryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with id={} was not found",
                id
            )));
        }

        if repo.has_events(id).await? {
            return Err(AppError::Conflict(
                "The category is not empty".to_string(),
            ));
        }

        repo.delete(id).await?;
        info!(category_id = id, "category deleted");

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id={} was not found", id)))
    }

    pub async fn get_paginated(&self, page: Pagination) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_paginated(page).await?)
    }
}
