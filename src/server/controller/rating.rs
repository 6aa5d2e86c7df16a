//! Rating endpoints.
//!
//! As with comments, the `{id}` segment under `/users/{userId}/rating` is the event when
//! rating and the rating itself when changing or withdrawing it.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        rating::{EventRatingDto, NewRatingDto, RatingDto},
    },
    server::{
        controller::extract::{AppJson, AppPath},
        error::AppError,
        model::rating::AssessmentParams,
        service::rating::RatingService,
        state::AppState,
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

/// Rate an event.
///
/// # Returns
/// - `201 Created` - Created rating
/// - `400 Bad Request` - Assessment outside 0..=5
/// - `404 Not Found` - Unknown user or event
/// - `409 Conflict` - Own event or already rated
#[utoipa::path(
    post,
    path = "/users/{userId}/rating/{id}",
    tag = RATING_TAG,
    params(
        ("userId" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = NewRatingDto,
    responses(
        (status = 201, description = "Created rating", body = RatingDto),
        (status = 400, description = "Invalid assessment", body = ErrorDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 409, description = "Rating not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rating(
    State(state): State<AppState>,
    AppPath((user_id, event_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<NewRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AssessmentParams::from_dto(payload)?;

    let rating = RatingService::new(&state.db)
        .create(user_id, event_id, params)
        .await?;

    Ok((StatusCode::CREATED, AppJson(rating.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/users/{userId}/rating/{id}",
    tag = RATING_TAG,
    params(
        ("userId" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Rating ID")
    ),
    request_body = NewRatingDto,
    responses(
        (status = 200, description = "Updated rating", body = RatingDto),
        (status = 400, description = "Invalid assessment", body = ErrorDto),
        (status = 404, description = "User or rating not found", body = ErrorDto),
        (status = 409, description = "Rating belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rating(
    State(state): State<AppState>,
    AppPath((user_id, rating_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<NewRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AssessmentParams::from_dto(payload)?;

    let rating = RatingService::new(&state.db)
        .update(user_id, rating_id, params)
        .await?;

    Ok(AppJson(rating.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/users/{userId}/rating/{id}",
    tag = RATING_TAG,
    params(
        ("userId" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Rating ID")
    ),
    responses(
        (status = 204, description = "Rating withdrawn"),
        (status = 404, description = "User or rating not found", body = ErrorDto),
        (status = 409, description = "Rating belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    AppPath((user_id, rating_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    RatingService::new(&state.db)
        .delete(user_id, rating_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Average assessment and number of ratings of an event.
#[utoipa::path(
    get,
    path = "/events/{eventId}/rating",
    tag = RATING_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event rating", body = EventRatingDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_rating(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rating = RatingService::new(&state.db)
        .get_event_rating(event_id)
        .await?;

    Ok(AppJson(rating.into_dto(event_id)))
}
