//! Compilation endpoints: admin management under `/admin/compilations` and public
//! reads under `/compilations`.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        compilation::{CompilationDto, NewCompilationDto, UpdateCompilationRequest},
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::PaginationParams,
        },
        error::AppError,
        model::compilation::{CreateCompilationParams, UpdateCompilationParams},
        service::compilation::CompilationService,
        state::AppState,
    },
};

/// Tag for grouping compilation endpoints in OpenAPI documentation
pub static COMPILATION_TAG: &str = "compilation";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompilationListQuery {
    /// Only pinned (`true`) or unpinned (`false`) compilations.
    pub pinned: Option<bool>,
}

/// Create a compilation.
///
/// Unknown event ids in `events` are skipped.
#[utoipa::path(
    post,
    path = "/admin/compilations",
    tag = COMPILATION_TAG,
    request_body = NewCompilationDto,
    responses(
        (status = 201, description = "Created compilation", body = CompilationDto),
        (status = 400, description = "Invalid compilation data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_compilation(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewCompilationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCompilationParams::from_dto(payload)?;

    let compilation = CompilationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, AppJson(compilation.into_dto())))
}

/// Edit a compilation. A present `events` list replaces the current one.
#[utoipa::path(
    patch,
    path = "/admin/compilations/{compId}",
    tag = COMPILATION_TAG,
    params(
        ("compId" = i32, Path, description = "Compilation ID")
    ),
    request_body = UpdateCompilationRequest,
    responses(
        (status = 200, description = "Updated compilation", body = CompilationDto),
        (status = 400, description = "Invalid compilation data", body = ErrorDto),
        (status = 404, description = "Compilation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_compilation(
    State(state): State<AppState>,
    AppPath(compilation_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCompilationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCompilationParams::from_dto(compilation_id, payload)?;

    let compilation = CompilationService::new(&state.db).update(params).await?;

    Ok(AppJson(compilation.into_dto()))
}

/// Delete a compilation. Its events are kept.
#[utoipa::path(
    delete,
    path = "/admin/compilations/{compId}",
    tag = COMPILATION_TAG,
    params(
        ("compId" = i32, Path, description = "Compilation ID")
    ),
    responses(
        (status = 204, description = "Compilation deleted"),
        (status = 404, description = "Compilation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_compilation(
    State(state): State<AppState>,
    AppPath(compilation_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CompilationService::new(&state.db)
        .delete(compilation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/compilations",
    tag = COMPILATION_TAG,
    params(CompilationListQuery, PaginationParams),
    responses(
        (status = 200, description = "Compilations", body = Vec<CompilationDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_compilations(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CompilationListQuery>,
    AppQuery(page): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let compilations = CompilationService::new(&state.db)
        .get_paginated(query.pinned, page.into_pagination()?)
        .await?;

    let dtos: Vec<CompilationDto> = compilations.into_iter().map(|c| c.into_dto()).collect();

    Ok(AppJson(dtos))
}

#[utoipa::path(
    get,
    path = "/compilations/{compId}",
    tag = COMPILATION_TAG,
    params(
        ("compId" = i32, Path, description = "Compilation ID")
    ),
    responses(
        (status = 200, description = "Compilation", body = CompilationDto),
        (status = 404, description = "Compilation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_compilation(
    State(state): State<AppState>,
    AppPath(compilation_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let compilation = CompilationService::new(&state.db)
        .get_by_id(compilation_id)
        .await?;

    Ok(AppJson(compilation.into_dto()))
}
