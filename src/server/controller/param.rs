//! Query parameter types and parsers shared by controllers.
//!
//! List filters (`ids=1,2,3`) are split by `serde_with` on the query structs themselves.
//! Timestamps arrive in the `yyyy-MM-dd HH:mm:ss` layout and fail with
//! `AppError::BadRequest`.

use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::datetime,
    server::{
        error::AppError,
        model::pagination::{Pagination, DEFAULT_PAGE_SIZE},
    },
};

/// Offset window shared by every listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of leading items to skip.
    #[serde(default)]
    pub from: i64,
    /// Maximum number of items to return.
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn into_pagination(self) -> Result<Pagination, AppError> {
        Pagination::new(self.from, self.size)
    }
}

/// Treats an empty comma-separated list (`ids=`) like an absent one.
pub fn non_empty<T>(list: Option<Vec<T>>) -> Option<Vec<T>> {
    list.filter(|items| !items.is_empty())
}

/// Parses an optional `yyyy-MM-dd HH:mm:ss` timestamp.
pub fn parse_date_time(name: &str, raw: Option<&str>) -> Result<Option<NaiveDateTime>, AppError> {
    raw.map(|value| {
        datetime::parse(value.trim()).map_err(|_| {
            AppError::BadRequest(format!(
                "Parameter '{}' must use the yyyy-MM-dd HH:mm:ss format, got '{}'",
                name, value
            ))
        })
    })
    .transpose()
}
