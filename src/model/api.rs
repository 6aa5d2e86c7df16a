use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Canonical status name, e.g. `NOT_FOUND`.
    pub status: String,
    /// Short description of the error category.
    pub reason: String,
    pub message: String,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-19 12:00:00")]
    pub timestamp: NaiveDateTime,
}
