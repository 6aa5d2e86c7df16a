use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::pagination::Pagination;

pub struct CompilationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompilationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a compilation without events.
    pub async fn create(
        &self,
        title: String,
        pinned: bool,
    ) -> Result<entity::compilation::Model, DbErr> {
        entity::compilation::ActiveModel {
            title: ActiveValue::Set(title),
            pinned: ActiveValue::Set(pinned),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::compilation::Model>, DbErr> {
        entity::prelude::Compilation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a window of compilations, newest id first.
    pub async fn get_paginated(
        &self,
        pinned: Option<bool>,
        page: Pagination,
    ) -> Result<Vec<entity::compilation::Model>, DbErr> {
        let mut query = entity::prelude::Compilation::find();

        if let Some(pinned) = pinned {
            query = query.filter(entity::compilation::Column::Pinned.eq(pinned));
        }

        query
            .order_by_desc(entity::compilation::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await
    }

    /// Updates title and pinned flag, keeping fields passed as `None`.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated compilation
    /// - `Err(DbErr::RecordNotFound)` - No compilation with this id
    pub async fn update(
        &self,
        id: i32,
        title: Option<String>,
        pinned: Option<bool>,
    ) -> Result<entity::compilation::Model, DbErr> {
        let compilation = entity::prelude::Compilation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Compilation with id {} not found",
                id
            )))?;

        if title.is_none() && pinned.is_none() {
            return Ok(compilation);
        }

        let mut active_model: entity::compilation::ActiveModel = compilation.into();
        if let Some(title) = title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(pinned) = pinned {
            active_model.pinned = ActiveValue::Set(pinned);
        }

        active_model.update(self.db).await
    }

    /// Replaces the events linked to a compilation.
    pub async fn set_events(&self, compilation_id: i32, event_ids: Vec<i32>) -> Result<(), DbErr> {
        entity::prelude::CompilationEvent::delete_many()
            .filter(entity::compilation_event::Column::CompilationId.eq(compilation_id))
            .exec(self.db)
            .await?;

        if event_ids.is_empty() {
            return Ok(());
        }

        let links = event_ids
            .into_iter()
            .map(|event_id| entity::compilation_event::ActiveModel {
                compilation_id: ActiveValue::Set(compilation_id),
                event_id: ActiveValue::Set(event_id),
            });

        entity::prelude::CompilationEvent::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Gets the linked event ids of each compilation, ordered by event id.
    pub async fn get_event_ids(
        &self,
        compilation_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if compilation_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::CompilationEvent::find()
            .filter(entity::compilation_event::Column::CompilationId.is_in(compilation_ids))
            .order_by_asc(entity::compilation_event::Column::EventId)
            .all(self.db)
            .await?;

        let mut result: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            result
                .entry(link.compilation_id)
                .or_default()
                .push(link.event_id);
        }

        Ok(result)
    }

    /// Deletes a compilation and its event links, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::CompilationEvent::delete_many()
            .filter(entity::compilation_event::Column::CompilationId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Compilation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
