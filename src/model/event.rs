use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{category::CategoryDto, user::UserShortDto};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStateDto {
    Pending,
    Published,
    Canceled,
}

/// Parses the state names used in query strings (`states=PENDING,PUBLISHED`).
impl FromStr for EventStateDto {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "PENDING" => Ok(Self::Pending),
            "PUBLISHED" => Ok(Self::Published),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(format!("Unknown state: {}", other)),
        }
    }
}

/// State change an initiator may request while editing their event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStateActionDto {
    SendToReview,
    CancelReview,
}

/// Moderation decision an admin may apply to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminStateActionDto {
    PublishEvent,
    RejectEvent,
}

/// Ordering of the public event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSortDto {
    EventDate,
    Views,
    Ratings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventFullDto {
    pub id: i32,
    pub annotation: String,
    pub category: CategoryDto,
    pub confirmed_requests: i32,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-19 12:00:00")]
    pub created_on: NaiveDateTime,
    pub description: String,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-25 18:30:00")]
    pub event_date: NaiveDateTime,
    pub initiator: UserShortDto,
    pub location: LocationDto,
    pub paid: bool,
    pub participant_limit: i32,
    #[serde(with = "crate::model::datetime::option_format")]
    #[schema(value_type = Option<String>, example = "2026-10-20 09:00:00")]
    pub published_on: Option<NaiveDateTime>,
    pub request_moderation: bool,
    pub state: EventStateDto,
    pub title: String,
    pub views: i64,
    /// Average assessment of the event, `0.0` when it has not been rated.
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventShortDto {
    pub id: i32,
    pub annotation: String,
    pub category: CategoryDto,
    pub confirmed_requests: i32,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-25 18:30:00")]
    pub event_date: NaiveDateTime,
    pub initiator: UserShortDto,
    pub paid: bool,
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEventDto {
    pub annotation: String,
    pub category: i32,
    pub description: String,
    #[serde(with = "crate::model::datetime::format")]
    #[schema(value_type = String, example = "2026-10-25 18:30:00")]
    pub event_date: NaiveDateTime,
    pub location: LocationDto,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub participant_limit: Option<i32>,
    #[serde(default)]
    pub request_moderation: Option<bool>,
    pub title: String,
}

/// Partial update submitted by the event initiator. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventUserRequest {
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub category: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "crate::model::datetime::option_format")]
    #[schema(value_type = Option<String>, example = "2026-10-25 18:30:00")]
    pub event_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<LocationDto>,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub participant_limit: Option<i32>,
    #[serde(default)]
    pub request_moderation: Option<bool>,
    #[serde(default)]
    pub state_action: Option<UserStateActionDto>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Partial update submitted by an admin. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventAdminRequest {
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub category: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "crate::model::datetime::option_format")]
    #[schema(value_type = Option<String>, example = "2026-10-25 18:30:00")]
    pub event_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<LocationDto>,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub participant_limit: Option<i32>,
    #[serde(default)]
    pub request_moderation: Option<bool>,
    #[serde(default)]
    pub state_action: Option<AdminStateActionDto>,
    #[serde(default)]
    pub title: Option<String>,
}
