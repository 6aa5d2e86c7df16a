use crate::server::error::AppError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Offset based window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of rows to skip.
    pub offset: u64,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl Pagination {
    /// Builds a window from the `from`/`size` query parameters.
    ///
    /// # Arguments
    /// - `from` - Number of leading rows to skip, must be zero or positive
    /// - `size` - Page size, must be positive
    ///
    /// # Returns
    /// - `Ok(Pagination)` - Valid window
    /// - `Err(AppError::BadRequest)` - Negative `from` or non-positive `size`
    pub fn new(from: i64, size: i64) -> Result<Self, AppError> {
        if from < 0 {
            return Err(AppError::BadRequest(format!(
                "Parameter 'from' must be zero or positive, got {}",
                from
            )));
        }
        if size <= 0 {
            return Err(AppError::BadRequest(format!(
                "Parameter 'size' must be positive, got {}",
                size
            )));
        }

        Ok(Self {
            offset: from as u64,
            limit: size as u64,
        })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE as u64,
        }
    }
}
