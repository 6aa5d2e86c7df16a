use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub assessment: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewRatingDto {
    pub assessment: i32,
}

/// Aggregated assessments of a single event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRatingDto {
    pub event_id: i32,
    pub average: f64,
    pub count: u64,
}
