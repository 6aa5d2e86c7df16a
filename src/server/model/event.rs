//! Event domain models, operation parameters and listing filters.
//!
//! `Event` is the fully loaded form returned by the repository: the event row together
//! with its category, initiator, location and average rating. Parameter types validate
//! incoming DTOs so services only ever see well-formed values.

use chrono::NaiveDateTime;
use entity::event::EventState;

use crate::{
    model::event::{
        AdminStateActionDto, EventFullDto, EventShortDto, EventSortDto, EventStateDto,
        LocationDto, NewEventDto, UpdateEventAdminRequest, UpdateEventUserRequest,
        UserStateActionDto,
    },
    server::{
        error::AppError,
        model::{category::Category, pagination::Pagination, user::UserShort},
        util::validation,
    },
};

const ANNOTATION_MIN: usize = 20;
const ANNOTATION_MAX: usize = 2000;
const DESCRIPTION_MIN: usize = 20;
const DESCRIPTION_MAX: usize = 7000;
const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            lat: entity.lat,
            lon: entity.lon,
        }
    }

    pub fn from_dto(dto: LocationDto) -> Self {
        Self {
            lat: dto.lat,
            lon: dto.lon,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Event with every relation needed to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub annotation: String,
    pub category: Category,
    pub confirmed_requests: i32,
    pub created_on: NaiveDateTime,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub initiator: UserShort,
    pub location: Location,
    pub paid: bool,
    pub participant_limit: i32,
    pub published_on: Option<NaiveDateTime>,
    pub request_moderation: bool,
    pub state: EventState,
    pub title: String,
    pub views: i64,
    /// Average assessment, `0.0` for unrated events.
    pub rating: f64,
}

impl Event {
    /// Assembles the domain model from an event row and its already loaded relations.
    pub fn from_entity(
        entity: entity::event::Model,
        category: Category,
        initiator: UserShort,
        location: Location,
        rating: f64,
    ) -> Self {
        Self {
            id: entity.id,
            annotation: entity.annotation,
            category,
            confirmed_requests: entity.confirmed_requests,
            created_on: entity.created_on,
            description: entity.description,
            event_date: entity.event_date,
            initiator,
            location,
            paid: entity.paid,
            participant_limit: entity.participant_limit,
            published_on: entity.published_on,
            request_moderation: entity.request_moderation,
            state: entity.state,
            title: entity.title,
            views: entity.views,
            rating,
        }
    }

    pub fn into_dto(self) -> EventFullDto {
        EventFullDto {
            id: self.id,
            annotation: self.annotation,
            category: self.category.into_dto(),
            confirmed_requests: self.confirmed_requests,
            created_on: self.created_on,
            description: self.description,
            event_date: self.event_date,
            initiator: self.initiator.into_dto(),
            location: self.location.into_dto(),
            paid: self.paid,
            participant_limit: self.participant_limit,
            published_on: self.published_on,
            request_moderation: self.request_moderation,
            state: state_into_dto(self.state),
            title: self.title,
            views: self.views,
            rating: self.rating,
        }
    }

    /// Converts to the abbreviated form embedded in compilations.
    pub fn into_short_dto(self) -> EventShortDto {
        EventShortDto {
            id: self.id,
            annotation: self.annotation,
            category: self.category.into_dto(),
            confirmed_requests: self.confirmed_requests,
            event_date: self.event_date,
            initiator: self.initiator.into_dto(),
            paid: self.paid,
            title: self.title,
            views: self.views,
        }
    }
}

pub fn state_into_dto(state: EventState) -> EventStateDto {
    match state {
        EventState::Pending => EventStateDto::Pending,
        EventState::Published => EventStateDto::Published,
        EventState::Canceled => EventStateDto::Canceled,
    }
}

pub fn state_from_dto(state: EventStateDto) -> EventState {
    match state {
        EventStateDto::Pending => EventState::Pending,
        EventStateDto::Published => EventState::Published,
        EventStateDto::Canceled => EventState::Canceled,
    }
}

/// Returns `true` when the event cannot accept another confirmed participant.
pub fn limit_reached(participant_limit: i32, confirmed_requests: i32) -> bool {
    participant_limit > 0 && confirmed_requests >= participant_limit
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub initiator_id: i32,
    pub category_id: i32,
    pub annotation: String,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub location: Location,
    pub paid: bool,
    pub participant_limit: i32,
    pub request_moderation: bool,
    pub title: String,
}

impl CreateEventParams {
    /// Validates a new event and fills in defaults for omitted flags.
    ///
    /// # Arguments
    /// - `initiator_id` - ID of the user creating the event
    /// - `dto` - Request body
    /// - `now` - Current time, the event date must not precede it
    ///
    /// # Returns
    /// - `Ok(CreateEventParams)` - Valid parameters with `paid=false`,
    ///   `participant_limit=0` and `request_moderation=true` unless provided
    /// - `Err(AppError::BadRequest)` - Length, limit or date violation
    pub fn from_dto(
        initiator_id: i32,
        dto: NewEventDto,
        now: NaiveDateTime,
    ) -> Result<Self, AppError> {
        validation::require_text("annotation", &dto.annotation, ANNOTATION_MIN, ANNOTATION_MAX)?;
        validation::require_text(
            "description",
            &dto.description,
            DESCRIPTION_MIN,
            DESCRIPTION_MAX,
        )?;
        validation::require_text("title", &dto.title, TITLE_MIN, TITLE_MAX)?;
        validation::require_not_past("eventDate", dto.event_date, now)?;

        let participant_limit = dto.participant_limit.unwrap_or(0);
        validation::require_non_negative("participantLimit", participant_limit)?;

        Ok(Self {
            initiator_id,
            category_id: dto.category,
            annotation: dto.annotation,
            description: dto.description,
            event_date: dto.event_date,
            location: Location::from_dto(dto.location),
            paid: dto.paid.unwrap_or(false),
            participant_limit,
            request_moderation: dto.request_moderation.unwrap_or(true),
            title: dto.title,
        })
    }
}

/// State transition requested alongside an event update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStateAction {
    SendToReview,
    CancelReview,
    Publish,
    Reject,
}

impl From<UserStateActionDto> for EventStateAction {
    fn from(dto: UserStateActionDto) -> Self {
        match dto {
            UserStateActionDto::SendToReview => Self::SendToReview,
            UserStateActionDto::CancelReview => Self::CancelReview,
        }
    }
}

impl From<AdminStateActionDto> for EventStateAction {
    fn from(dto: AdminStateActionDto) -> Self {
        match dto {
            AdminStateActionDto::PublishEvent => Self::Publish,
            AdminStateActionDto::RejectEvent => Self::Reject,
        }
    }
}

/// Outcome of applying a state action to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub state: EventState,
    /// Set when the transition publishes the event.
    pub published_on: Option<NaiveDateTime>,
}

impl EventStateAction {
    /// Resolves the state an event moves to from `current`.
    ///
    /// # Returns
    /// - `Ok(StateTransition)` - Allowed transition
    /// - `Err(AppError::Conflict)` - Publishing an event that is not pending, or
    ///   rejecting one that is already published
    pub fn apply(self, current: EventState, now: NaiveDateTime) -> Result<StateTransition, AppError> {
        match self {
            Self::SendToReview => Ok(StateTransition {
                state: EventState::Pending,
                published_on: None,
            }),
            Self::CancelReview => Ok(StateTransition {
                state: EventState::Canceled,
                published_on: None,
            }),
            Self::Publish => {
                if current != EventState::Pending {
                    return Err(AppError::Conflict(format!(
                        "Cannot publish the event because it's not in the right state: {:?}",
                        current
                    )));
                }
                Ok(StateTransition {
                    state: EventState::Published,
                    published_on: Some(now),
                })
            }
            Self::Reject => {
                if current == EventState::Published {
                    return Err(AppError::Conflict(
                        "Cannot reject the event because it has already been published"
                            .to_string(),
                    ));
                }
                Ok(StateTransition {
                    state: EventState::Canceled,
                    published_on: None,
                })
            }
        }
    }
}

/// Partial event update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub annotation: Option<String>,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDateTime>,
    pub location: Option<Location>,
    pub paid: Option<bool>,
    pub participant_limit: Option<i32>,
    pub request_moderation: Option<bool>,
    pub state_action: Option<EventStateAction>,
    pub title: Option<String>,
}

impl UpdateEventParams {
    /// Validates an initiator's update request.
    pub fn from_user_dto(dto: UpdateEventUserRequest, now: NaiveDateTime) -> Result<Self, AppError> {
        let params = Self {
            annotation: dto.annotation,
            category_id: dto.category,
            description: dto.description,
            event_date: dto.event_date,
            location: dto.location.map(Location::from_dto),
            paid: dto.paid,
            participant_limit: dto.participant_limit,
            request_moderation: dto.request_moderation,
            state_action: dto.state_action.map(Into::into),
            title: dto.title,
        };
        params.validate(now)?;

        Ok(params)
    }

    /// Validates an admin's update request.
    pub fn from_admin_dto(
        dto: UpdateEventAdminRequest,
        now: NaiveDateTime,
    ) -> Result<Self, AppError> {
        let params = Self {
            annotation: dto.annotation,
            category_id: dto.category,
            description: dto.description,
            event_date: dto.event_date,
            location: dto.location.map(Location::from_dto),
            paid: dto.paid,
            participant_limit: dto.participant_limit,
            request_moderation: dto.request_moderation,
            state_action: dto.state_action.map(Into::into),
            title: dto.title,
        };
        params.validate(now)?;

        Ok(params)
    }

    fn validate(&self, now: NaiveDateTime) -> Result<(), AppError> {
        if let Some(annotation) = &self.annotation {
            validation::require_text("annotation", annotation, ANNOTATION_MIN, ANNOTATION_MAX)?;
        }
        if let Some(description) = &self.description {
            validation::require_text(
                "description",
                description,
                DESCRIPTION_MIN,
                DESCRIPTION_MAX,
            )?;
        }
        if let Some(title) = &self.title {
            validation::require_text("title", title, TITLE_MIN, TITLE_MAX)?;
        }
        if let Some(event_date) = self.event_date {
            validation::require_not_past("eventDate", event_date, now)?;
        }
        if let Some(limit) = self.participant_limit {
            validation::require_non_negative("participantLimit", limit)?;
        }

        Ok(())
    }
}

/// Rejects a window whose start lies after its end.
pub fn require_valid_range(
    range_start: Option<NaiveDateTime>,
    range_end: Option<NaiveDateTime>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (range_start, range_end) {
        if start > end {
            return Err(AppError::BadRequest(
                "rangeStart must not be after rangeEnd".to_string(),
            ));
        }
    }

    Ok(())
}

/// Filters of the admin event search. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct AdminEventFilter {
    pub users: Option<Vec<i32>>,
    pub states: Option<Vec<EventState>>,
    pub categories: Option<Vec<i32>>,
    pub range_start: Option<NaiveDateTime>,
    pub range_end: Option<NaiveDateTime>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSort {
    EventDate,
    Views,
    Ratings,
}

impl From<EventSortDto> for EventSort {
    fn from(dto: EventSortDto) -> Self {
        match dto {
            EventSortDto::EventDate => Self::EventDate,
            EventSortDto::Views => Self::Views,
            EventSortDto::Ratings => Self::Ratings,
        }
    }
}

/// Filters of the public event search. Only published events are ever returned.
#[derive(Debug, Clone, Default)]
pub struct PublicEventFilter {
    /// Case-insensitive substring matched against annotation and description.
    pub text: Option<String>,
    pub categories: Option<Vec<i32>>,
    pub paid: Option<bool>,
    pub range_start: Option<NaiveDateTime>,
    pub range_end: Option<NaiveDateTime>,
    pub only_available: bool,
    pub sort: Option<EventSort>,
    pub pagination: Pagination,
}
