use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::event::EventShortDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompilationDto {
    pub id: i32,
    pub events: Vec<EventShortDto>,
    pub pinned: bool,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCompilationDto {
    #[serde(default)]
    pub events: Option<Vec<i32>>,
    #[serde(default)]
    pub pinned: Option<bool>,
    pub title: String,
}

/// Partial compilation update. `events`, when present, replaces the whole set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompilationRequest {
    #[serde(default)]
    pub events: Option<Vec<i32>>,
    #[serde(default)]
    pub pinned: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
}
