use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author: i32,
    pub event: i32,
    pub updated: bool,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-19 12:00:00")]
    pub created: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCommentDto {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentCountDto {
    pub event_id: i32,
    pub count: u64,
}

/// Ordering of an event's comments by creation time.
///
/// The `SORT_`-prefixed names are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentSortDto {
    #[serde(alias = "SORT_DATE_ASC")]
    DateAsc,
    #[serde(alias = "SORT_DATE_DESC")]
    DateDesc,
}
