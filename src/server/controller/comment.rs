//! Comment endpoints.
//!
//! The `{id}` segment under `/users/{userId}/comments` names the event when posting and
//! the comment when editing or deleting.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentCountDto, CommentDto, CommentSortDto, NewCommentDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::PaginationParams,
        },
        error::AppError,
        model::comment::CommentTextParams,
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListQuery {
    /// `DATE_ASC` or `DATE_DESC`; newest id first when absent.
    pub sort: Option<CommentSortDto>,
}

/// Comment on an event.
#[utoipa::path(
    post,
    path = "/users/{userId}/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("userId" = i32, Path, description = "Author ID"),
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = NewCommentDto,
    responses(
        (status = 201, description = "Created comment", body = CommentDto),
        (status = 400, description = "Blank or oversized text", body = ErrorDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AppPath((user_id, event_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<NewCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CommentTextParams::from_dto(payload)?;

    let comment = CommentService::new(&state.db)
        .create(user_id, event_id, params)
        .await?;

    Ok((StatusCode::CREATED, AppJson(comment.into_dto())))
}

/// Edit the text of the user's own comment.
#[utoipa::path(
    patch,
    path = "/users/{userId}/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("userId" = i32, Path, description = "Author ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = NewCommentDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Blank or oversized text", body = ErrorDto),
        (status = 404, description = "User or comment not found", body = ErrorDto),
        (status = 409, description = "Comment belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    AppPath((user_id, comment_id)): AppPath<(i32, i32)>,
    AppJson(payload): AppJson<NewCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CommentTextParams::from_dto(payload)?;

    let comment = CommentService::new(&state.db)
        .update(user_id, comment_id, params)
        .await?;

    Ok(AppJson(comment.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/users/{userId}/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("userId" = i32, Path, description = "Author ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "User or comment not found", body = ErrorDto),
        (status = 409, description = "Comment belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_own_comment(
    State(state): State<AppState>,
    AppPath((user_id, comment_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db)
        .delete_by_author(user_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove any comment.
#[utoipa::path(
    delete,
    path = "/admin/comments/{commentId}",
    tag = COMMENT_TAG,
    params(
        ("commentId" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    AppPath(comment_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db)
        .delete_by_admin(comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/events/{eventId}/comments",
    tag = COMMENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID"),
        CommentListQuery,
        PaginationParams
    ),
    responses(
        (status = 200, description = "Comments of the event", body = Vec<CommentDto>),
        (status = 400, description = "Invalid sort or pagination", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_comments(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
    AppQuery(query): AppQuery<CommentListQuery>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_by_event(event_id, query.sort.map(Into::into), page.into_pagination()?)
        .await?;

    let dtos: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok(AppJson(dtos))
}

#[utoipa::path(
    get,
    path = "/events/{eventId}/comments/count",
    tag = COMMENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Number of comments", body = CommentCountDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_event_comments(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let count = CommentService::new(&state.db)
        .count_by_event(event_id)
        .await?;

    Ok(AppJson(CommentCountDto { event_id, count }))
}
