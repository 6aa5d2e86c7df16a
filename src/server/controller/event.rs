//! Event endpoints for initiators (`/users/{userId}/events`), administrators
//! (`/admin/events`) and the public catalogue (`/events`).

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_with::{formats::CommaSeparator, serde_as, StringWithSeparator};
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        event::{
            EventFullDto, EventShortDto, EventSortDto, EventStateDto, NewEventDto,
            UpdateEventAdminRequest, UpdateEventUserRequest,
        },
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::{non_empty, parse_date_time, PaginationParams},
        },
        error::AppError,
        model::event::{
            state_from_dto, AdminEventFilter, CreateEventParams, PublicEventFilter,
            UpdateEventParams,
        },
        service::event::EventService,
        state::AppState,
        util::time,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Filters of the admin event search.
#[serde_as]
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AdminEventQuery {
    /// Comma-separated initiator ids.
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, i32>>")]
    #[param(value_type = Option<String>)]
    pub users: Option<Vec<i32>>,
    /// Comma-separated states: `PENDING`, `PUBLISHED`, `CANCELED`.
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, EventStateDto>>")]
    #[param(value_type = Option<String>)]
    pub states: Option<Vec<EventStateDto>>,
    /// Comma-separated category ids.
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, i32>>")]
    #[param(value_type = Option<String>)]
    pub categories: Option<Vec<i32>>,
    /// Earliest event date, `yyyy-MM-dd HH:mm:ss`.
    pub range_start: Option<String>,
    /// Latest event date, `yyyy-MM-dd HH:mm:ss`.
    pub range_end: Option<String>,
}

/// Filters of the public event search.
#[serde_as]
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PublicEventQuery {
    /// Substring searched in annotation and description.
    pub text: Option<String>,
    /// Comma-separated category ids.
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, i32>>")]
    #[param(value_type = Option<String>)]
    pub categories: Option<Vec<i32>>,
    pub paid: Option<bool>,
    /// Earliest event date, `yyyy-MM-dd HH:mm:ss`.
    pub range_start: Option<String>,
    /// Latest event date, `yyyy-MM-dd HH:mm:ss`.
    pub range_end: Option<String>,
    /// Only events with free places.
    pub only_available: Option<bool>,
    pub sort: Option<EventSortDto>,
}

fn into_full_dtos(events: Vec<crate::server::model::event::Event>) -> Vec<EventFullDto> {
    events.into_iter().map(|e| e.into_dto()).collect()
}

/// Create an event.
///
/// The event starts `PENDING` and waits for an admin to publish it.
///
/// # Returns
/// - `201 Created` - Created event
/// - `400 Bad Request` - Invalid fields or event date in the past
/// - `404 Not Found` - Unknown user or category
#[utoipa::path(
    post,
    path = "/users/{userId}/events",
    tag = EVENT_TAG,
    params(
        ("userId" = i32, Path, description = "Initiator ID")
    ),
    request_body = NewEventDto,
    responses(
        (status = 201, description = "Created event", body = EventFullDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "User or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(payload): AppJson<NewEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateEventParams::from_dto(user_id, payload, time::now())?;

    let event = EventService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, AppJson(event.into_dto())))
}

/// List the events a user initiated.
#[utoipa::path(
    get,
    path = "/users/{userId}/events",
    tag = EVENT_TAG,
    params(
        ("userId" = i32, Path, description = "Initiator ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Events of the user", body = Vec<EventShortDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_events(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_by_initiator(user_id, page.into_pagination()?)
        .await?;

    let dtos: Vec<EventShortDto> = events.into_iter().map(|e| e.into_short_dto()).collect();

    Ok(AppJson(dtos))
}

/// Get one of the user's own events.
#[utoipa::path(
    get,
    path = "/users/{userId}/events/{eventId}",
    tag = EVENT_TAG,
    params(
        ("userId" = i32, Path, description = "Initiator ID"),
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event", body = EventFullDto),
        (status = 404, description = "Event not found or not initiated by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_event(
    State(state): State<AppState>,
    AppPath((user_id, event_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .get_for_initiator(user_id, event_id)
        .await?;

    Ok(AppJson(event.into_dto()))
}

/// Edit one of the user's own events.
///
/// # Returns
/// - `200 OK` - Updated event
/// - `400 Bad Request` - Invalid fields or the user is not the initiator
/// - `404 Not Found` - Unknown event or category
/// - `409 Conflict` - The event is already published
#[utoipa::path(
    patch,
    path = "/users/{userId}/events/{eventId}",
    tag = EVENT_TAG,
    params(
        ("userId" = i32, Path, description = "Initiator ID"),
        ("eventId" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventUserRequest,
    responses(
        (status = 200, description = "Updated event", body = EventFullDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event already published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_event(
    State(state): State<AppState>,
    AppPath((user_id, event_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<UpdateEventUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateEventParams::from_user_dto(payload, time::now())?;

    let event = EventService::new(&state.db)
        .update_by_initiator(user_id, event_id, params)
        .await?;

    Ok(AppJson(event.into_dto()))
}

/// Search events in any state, newest first.
#[utoipa::path(
    get,
    path = "/admin/events",
    tag = EVENT_TAG,
    params(AdminEventQuery, PaginationParams),
    responses(
        (status = 200, description = "Matching events", body = Vec<EventFullDto>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_admin_events(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AdminEventQuery>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AdminEventFilter {
        users: non_empty(query.users),
        states: non_empty(query.states)
            .map(|states| states.into_iter().map(state_from_dto).collect()),
        categories: non_empty(query.categories),
        range_start: parse_date_time("rangeStart", query.range_start.as_deref())?,
        range_end: parse_date_time("rangeEnd", query.range_end.as_deref())?,
        pagination: page.into_pagination()?,
    };

    let events = EventService::new(&state.db).search_admin(filter).await?;

    Ok(AppJson(into_full_dtos(events)))
}

/// Edit, publish or reject an event.
///
/// # Returns
/// - `200 OK` - Updated event
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - Unknown event or category
/// - `409 Conflict` - Publishing a non-pending event or rejecting a published one
#[utoipa::path(
    patch,
    path = "/admin/events/{eventId}",
    tag = EVENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventAdminRequest,
    responses(
        (status = 200, description = "Updated event", body = EventFullDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "State transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin_event(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateEventAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateEventParams::from_admin_dto(payload, time::now())?;

    let event = EventService::new(&state.db)
        .update_by_admin(event_id, params)
        .await?;

    Ok(AppJson(event.into_dto()))
}

/// Search published events.
///
/// Without a date range only upcoming events are listed.
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(PublicEventQuery, PaginationParams),
    responses(
        (status = 200, description = "Matching published events", body = Vec<EventShortDto>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_public_events(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PublicEventQuery>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PublicEventFilter {
        text: query.text,
        categories: non_empty(query.categories),
        paid: query.paid,
        range_start: parse_date_time("rangeStart", query.range_start.as_deref())?,
        range_end: parse_date_time("rangeEnd", query.range_end.as_deref())?,
        only_available: query.only_available.unwrap_or(false),
        sort: query.sort.map(Into::into),
        pagination: page.into_pagination()?,
    };

    let events = EventService::new(&state.db).search_public(filter).await?;

    let dtos: Vec<EventShortDto> = events.into_iter().map(|e| e.into_short_dto()).collect();

    Ok(AppJson(dtos))
}

/// Get a published event. Every successful read counts as a view.
#[utoipa::path(
    get,
    path = "/events/{eventId}",
    tag = EVENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Published event", body = EventFullDto),
        (status = 404, description = "Event not found or not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_event(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_published(event_id).await?;

    Ok(AppJson(event.into_dto()))
}
