use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{category::Category, pagination::Pagination};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a category with the given name.
    pub async fn create(&self, name: String) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds a category by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets a window of categories ordered by id.
    pub async fn get_paginated(&self, page: Pagination) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Renames a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - Updated category
    /// - `Err(DbErr::RecordNotFound)` - No category with this id
    pub async fn update(&self, id: i32, name: String) -> Result<Category, DbErr> {
        let category = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Category with id {} not found",
                id
            )))?;

        let mut active_model: entity::category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(name);

        let entity = active_model.update(self.db).await?;

        Ok(Category::from_entity(entity))
    }

    /// Deletes a category, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any event references the category.
    pub async fn has_events(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::CategoryId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
