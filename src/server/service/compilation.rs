use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::server::{
    data::{compilation::CompilationRepository, event::EventRepository},
    error::AppError,
    model::{
        compilation::{Compilation, CreateCompilationParams, UpdateCompilationParams},
        event::Event,
        pagination::Pagination,
    },
};

pub struct CompilationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompilationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a compilation. Event ids that match no event are dropped.
    pub async fn create(&self, params: CreateCompilationParams) -> Result<Compilation, AppError> {
        debug!(title = %params.title, "creating compilation");
        let txn = self.db.begin().await?;

        let event_ids = EventRepository::new(&txn)
            .existing_ids(params.event_ids)
            .await?;

        let repo = CompilationRepository::new(&txn);
        let compilation = repo.create(params.title, params.pinned).await?;
        repo.set_events(compilation.id, event_ids).await?;

        txn.commit().await?;
        info!(compilation_id = compilation.id, "compilation created");

        self.get_by_id(compilation.id).await
    }

    /// Updates the present fields. A new event list replaces the old one.
    pub async fn update(&self, params: UpdateCompilationParams) -> Result<Compilation, AppError> {
        debug!(compilation_id = params.id, "updating compilation");
        let txn = self.db.begin().await?;

        let repo = CompilationRepository::new(&txn);
        if repo.get_by_id(params.id).await?.is_none() {
            return Err(compilation_not_found(params.id));
        }

        repo.update(params.id, params.title, params.pinned).await?;

        if let Some(event_ids) = params.event_ids {
            let event_ids = EventRepository::new(&txn).existing_ids(event_ids).await?;
            repo.set_events(params.id, event_ids).await?;
        }

        txn.commit().await?;
        info!(compilation_id = params.id, "compilation updated");

        self.get_by_id(params.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        debug!(compilation_id = id, "deleting compilation");

        if !CompilationRepository::new(self.db).delete(id).await? {
            return Err(compilation_not_found(id));
        }
        info!(compilation_id = id, "compilation deleted");

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Compilation, AppError> {
        let compilation = CompilationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| compilation_not_found(id))?;

        self.attach_events(vec![compilation])
            .await?
            .pop()
            .ok_or_else(|| compilation_not_found(id))
    }

    /// Lists compilations, newest first, optionally only pinned or unpinned ones.
    pub async fn get_paginated(
        &self,
        pinned: Option<bool>,
        page: Pagination,
    ) -> Result<Vec<Compilation>, AppError> {
        let compilations = CompilationRepository::new(self.db)
            .get_paginated(pinned, page)
            .await?;

        self.attach_events(compilations).await
    }

    /// Loads the events of every compilation with one event query.
    async fn attach_events(
        &self,
        compilations: Vec<entity::compilation::Model>,
    ) -> Result<Vec<Compilation>, AppError> {
        let mut links = CompilationRepository::new(self.db)
            .get_event_ids(compilations.iter().map(|c| c.id).collect())
            .await?;

        let mut event_ids: Vec<i32> = links.values().flatten().copied().collect();
        event_ids.sort_unstable();
        event_ids.dedup();

        let events: HashMap<i32, Event> = EventRepository::new(self.db)
            .get_by_ids(event_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        Ok(compilations
            .into_iter()
            .map(|compilation| {
                let compilation_events = links
                    .remove(&compilation.id)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|id| events.get(&id).cloned())
                    .collect();

                Compilation::from_entity(compilation, compilation_events)
            })
            .collect())
    }
}

fn compilation_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Compilation with id={} was not found", id))
}
