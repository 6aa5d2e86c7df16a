//! Compilation domain model and parameters.

use crate::{
    model::compilation::{CompilationDto, NewCompilationDto, UpdateCompilationRequest},
    server::{error::AppError, model::event::Event, util::validation},
};

const TITLE_MAX: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub id: i32,
    pub pinned: bool,
    pub title: String,
    pub events: Vec<Event>,
}

impl Compilation {
    pub fn from_entity(entity: entity::compilation::Model, events: Vec<Event>) -> Self {
        Self {
            id: entity.id,
            pinned: entity.pinned,
            title: entity.title,
            events,
        }
    }

    pub fn into_dto(self) -> CompilationDto {
        CompilationDto {
            id: self.id,
            events: self.events.into_iter().map(Event::into_short_dto).collect(),
            pinned: self.pinned,
            title: self.title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompilationParams {
    pub title: String,
    pub pinned: bool,
    pub event_ids: Vec<i32>,
}

impl CreateCompilationParams {
    /// Validates the title (not blank, at most 50 characters) and defaults `pinned` to false.
    pub fn from_dto(dto: NewCompilationDto) -> Result<Self, AppError> {
        validation::require_text("title", &dto.title, 1, TITLE_MAX)?;

        Ok(Self {
            title: dto.title,
            pinned: dto.pinned.unwrap_or(false),
            event_ids: dto.events.unwrap_or_default(),
        })
    }
}

/// Partial update. `event_ids`, when present, replaces every linked event.
#[derive(Debug, Clone)]
pub struct UpdateCompilationParams {
    pub id: i32,
    pub title: Option<String>,
    pub pinned: Option<bool>,
    pub event_ids: Option<Vec<i32>>,
}

impl UpdateCompilationParams {
    pub fn from_dto(id: i32, dto: UpdateCompilationRequest) -> Result<Self, AppError> {
        if let Some(title) = &dto.title {
            validation::require_text("title", title, 1, TITLE_MAX)?;
        }

        Ok(Self {
            id,
            title: dto.title,
            pinned: dto.pinned,
            event_ids: dto.events,
        })
    }
}
