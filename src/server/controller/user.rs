use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_with::{formats::CommaSeparator, serde_as, StringWithSeparator};
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        user::{NewUserRequest, UserDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::{non_empty, PaginationParams},
        },
        error::AppError,
        model::user::CreateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[serde_as]
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Comma-separated user ids to restrict the listing to.
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, i32>>")]
    #[param(value_type = Option<String>)]
    pub ids: Option<Vec<i32>>,
}

/// Register a user.
///
/// # Returns
/// - `201 Created` - Registered user
/// - `400 Bad Request` - Invalid name or email
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/admin/users",
    tag = USER_TAG,
    request_body = NewUserRequest,
    responses(
        (status = 201, description = "Registered user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, AppJson(user.into_dto())))
}

/// List users ordered by id, optionally only the given ids.
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = USER_TAG,
    params(UserListQuery, PaginationParams),
    responses(
        (status = 200, description = "Users in the requested window", body = Vec<UserDto>),
        (status = 400, description = "Invalid ids or pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UserListQuery>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let ids = non_empty(query.ids);

    let users = UserService::new(&state.db)
        .get_paginated(ids, page.into_pagination()?)
        .await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok(AppJson(dtos))
}

/// Delete a user and everything they own.
#[utoipa::path(
    delete,
    path = "/admin/users/{userId}",
    tag = USER_TAG,
    params(
        ("userId" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
