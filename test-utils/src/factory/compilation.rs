//! Compilation factory for creating test compilations and their event links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating compilations with customizable fields.
pub struct CompilationFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    pinned: bool,
    event_ids: Vec<i32>,
}

impl<'a> CompilationFactory<'a> {
    /// Creates a new CompilationFactory with an unpinned `"Compilation {id}"` and no events.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Compilation {}", next_id()),
            pinned: false,
            event_ids: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Sets the events linked to the compilation.
    pub fn events(mut self, event_ids: Vec<i32>) -> Self {
        self.event_ids = event_ids;
        self
    }

    /// Builds and inserts the compilation and its event links.
    pub async fn build(self) -> Result<entity::compilation::Model, DbErr> {
        let compilation = entity::compilation::ActiveModel {
            title: ActiveValue::Set(self.title),
            pinned: ActiveValue::Set(self.pinned),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !self.event_ids.is_empty() {
            let links = self
                .event_ids
                .into_iter()
                .map(|event_id| entity::compilation_event::ActiveModel {
                    compilation_id: ActiveValue::Set(compilation.id),
                    event_id: ActiveValue::Set(event_id),
                });

            entity::prelude::CompilationEvent::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(compilation)
    }
}

/// Creates an empty, unpinned compilation.
pub async fn create_compilation(
    db: &DatabaseConnection,
) -> Result<entity::compilation::Model, DbErr> {
    CompilationFactory::new(db).build().await
}
