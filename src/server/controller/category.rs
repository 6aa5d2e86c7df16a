use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, NewCategoryDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::PaginationParams,
        },
        error::AppError,
        model::category::CategoryNameParams,
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a new category.
///
/// # Returns
/// - `201 Created` - Created category
/// - `400 Bad Request` - Blank or too long name
/// - `409 Conflict` - Name already in use
#[utoipa::path(
    post,
    path = "/admin/categories",
    tag = CATEGORY_TAG,
    request_body = NewCategoryDto,
    responses(
        (status = 201, description = "Created category", body = CategoryDto),
        (status = 400, description = "Invalid category name", body = ErrorDto),
        (status = 409, description = "Category name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CategoryNameParams::from_dto(payload)?;

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, AppJson(category.into_dto())))
}

/// Rename a category.
///
/// # Returns
/// - `200 OK` - Renamed category
/// - `400 Bad Request` - Blank or too long name
/// - `404 Not Found` - Unknown category
/// - `409 Conflict` - Name used by another category
#[utoipa::path(
    patch,
    path = "/admin/categories/{catId}",
    tag = CATEGORY_TAG,
    params(
        ("catId" = i32, Path, description = "Category ID")
    ),
    request_body = NewCategoryDto,
    responses(
        (status = 200, description = "Renamed category", body = CategoryDto),
        (status = 400, description = "Invalid category name", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(cat_id): AppPath<i32>,
    AppJson(payload): AppJson<NewCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CategoryNameParams::from_dto(payload)?;

    let category = CategoryService::new(&state.db)
        .update(cat_id, params)
        .await?;

    Ok(AppJson(category.into_dto()))
}

/// Delete a category no event uses.
#[utoipa::path(
    delete,
    path = "/admin/categories/{catId}",
    tag = CATEGORY_TAG,
    params(
        ("catId" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category is used by events", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(cat_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CategoryService::new(&state.db).delete(cat_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List categories ordered by id.
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Categories in the requested window", body = Vec<CategoryDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db)
        .get_paginated(page.into_pagination()?)
        .await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok(AppJson(dtos))
}

/// Get a category by id.
#[utoipa::path(
    get,
    path = "/categories/{catId}",
    tag = CATEGORY_TAG,
    params(
        ("catId" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(cat_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_id(cat_id).await?;

    Ok(AppJson(category.into_dto()))
}
