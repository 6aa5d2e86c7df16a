//! Participation request endpoints.
//!
//! Requesters file and cancel their own requests under `/users/{userId}/requests`;
//! initiators moderate requests of their events under
//! `/users/{userId}/events/{eventId}/requests`.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        request::{
            EventRequestStatusUpdateRequest, EventRequestStatusUpdateResult,
            ParticipationRequestDto,
        },
    },
    server::{
        controller::extract::{AppJson, AppPath, AppQuery},
        error::AppError,
        model::request::{ParticipationRequest, RequestStatusUpdateParams},
        service::request::RequestService,
        state::AppState,
    },
};

/// Tag for grouping participation request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NewRequestQuery {
    /// Event to participate in.
    pub event_id: i32,
}

fn into_dtos(requests: Vec<ParticipationRequest>) -> Vec<ParticipationRequestDto> {
    requests.into_iter().map(|r| r.into_dto()).collect()
}

/// File a participation request.
///
/// Events without moderation or without a participant limit confirm the request
/// immediately.
///
/// # Returns
/// - `201 Created` - Created request
/// - `404 Not Found` - Unknown user or event
/// - `409 Conflict` - Repeated request, own event, unpublished event or no places left
#[utoipa::path(
    post,
    path = "/users/{userId}/requests",
    tag = REQUEST_TAG,
    params(
        ("userId" = i32, Path, description = "Requester ID"),
        NewRequestQuery
    ),
    responses(
        (status = 201, description = "Created request", body = ParticipationRequestDto),
        (status = 400, description = "Missing or invalid eventId", body = ErrorDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 409, description = "Request not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppQuery(query): AppQuery<NewRequestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db)
        .create(user_id, query.event_id)
        .await?;

    Ok((StatusCode::CREATED, AppJson(request.into_dto())))
}

/// List the user's own participation requests.
#[utoipa::path(
    get,
    path = "/users/{userId}/requests",
    tag = REQUEST_TAG,
    params(
        ("userId" = i32, Path, description = "Requester ID")
    ),
    responses(
        (status = 200, description = "Requests of the user", body = Vec<ParticipationRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_requests(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let requests = RequestService::new(&state.db)
        .get_by_requester(user_id)
        .await?;

    Ok(AppJson(into_dtos(requests)))
}

/// Cancel one of the user's own requests.
#[utoipa::path(
    patch,
    path = "/users/{userId}/requests/{requestId}/cancel",
    tag = REQUEST_TAG,
    params(
        ("userId" = i32, Path, description = "Requester ID"),
        ("requestId" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Canceled request", body = ParticipationRequestDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_request(
    State(state): State<AppState>,
    AppPath((user_id, request_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db)
        .cancel(user_id, request_id)
        .await?;

    Ok(AppJson(request.into_dto()))
}

/// List requests filed for an event the user initiated.
#[utoipa::path(
    get,
    path = "/users/{userId}/events/{eventId}/requests",
    tag = REQUEST_TAG,
    params(
        ("userId" = i32, Path, description = "Initiator ID"),
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Requests of the event", body = Vec<ParticipationRequestDto>),
        (status = 404, description = "Event not found or not initiated by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_requests(
    State(state): State<AppState>,
    AppPath((user_id, event_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let requests = RequestService::new(&state.db)
        .get_by_event_for_initiator(user_id, event_id)
        .await?;

    Ok(AppJson(into_dtos(requests)))
}

/// Confirm or reject pending requests of an event.
///
/// # Returns
/// - `200 OK` - Requests confirmed and rejected by this call
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Unknown event or request
/// - `409 Conflict` - Not the initiator, request not pending, or the event is full
#[utoipa::path(
    patch,
    path = "/users/{userId}/events/{eventId}/requests",
    tag = REQUEST_TAG,
    params(
        ("userId" = i32, Path, description = "Initiator ID"),
        ("eventId" = i32, Path, description = "Event ID")
    ),
    request_body = EventRequestStatusUpdateRequest,
    responses(
        (status = 200, description = "Changed requests", body = EventRequestStatusUpdateResult),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Event or request not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_statuses(
    State(state): State<AppState>,
    AppPath((user_id, event_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<EventRequestStatusUpdateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = RequestStatusUpdateParams::from_dto(user_id, event_id, payload);

    let result = RequestService::new(&state.db)
        .update_statuses(params)
        .await?;

    Ok(AppJson(result.into_dto()))
}
