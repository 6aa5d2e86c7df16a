use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatusDto {
    Pending,
    Confirmed,
    Rejected,
    Canceled,
}

/// Status an initiator may assign to pending requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatusUpdateDto {
    Confirmed,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRequestDto {
    pub id: i32,
    pub requester: i32,
    pub event: i32,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-19 12:00:00")]
    pub created: NaiveDateTime,
    pub status: RequestStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequestStatusUpdateRequest {
    pub request_ids: Vec<i32>,
    pub status: RequestStatusUpdateDto,
}

/// Requests changed by a status update, split by their new status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequestStatusUpdateResult {
    pub confirmed_requests: Vec<ParticipationRequestDto>,
    pub rejected_requests: Vec<ParticipationRequestDto>,
}
