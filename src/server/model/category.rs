//! Category domain model and parameters.

use crate::{
    model::category::{CategoryDto, NewCategoryDto},
    server::{error::AppError, util::validation},
};

pub const CATEGORY_NAME_MAX: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Validated name for a new or renamed category.
#[derive(Debug, Clone)]
pub struct CategoryNameParams {
    pub name: String,
}

impl CategoryNameParams {
    /// Validates the DTO name: not blank, at most 50 characters.
    ///
    /// # Returns
    /// - `Ok(CategoryNameParams)` - Valid name
    /// - `Err(AppError::BadRequest)` - Name blank or too long
    pub fn from_dto(dto: NewCategoryDto) -> Result<Self, AppError> {
        validation::require_text("name", &dto.name, 1, CATEGORY_NAME_MAX)?;

        Ok(Self { name: dto.name })
    }
}
