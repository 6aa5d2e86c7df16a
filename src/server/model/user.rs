//! User domain models and parameters.

use crate::{
    model::user::{NewUserRequest, UserDto, UserShortDto},
    server::{error::AppError, util::validation},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// User reference without contact details, embedded in events.
#[derive(Debug, Clone, PartialEq)]
pub struct UserShort {
    pub id: i32,
    pub name: String,
}

impl UserShort {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> UserShortDto {
        UserShortDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
}

impl CreateUserParams {
    /// Validates a registration request.
    ///
    /// Name must be 2..=250 characters and not blank; email must be 6..=254 characters
    /// and well-formed.
    pub fn from_dto(dto: NewUserRequest) -> Result<Self, AppError> {
        validation::require_text("name", &dto.name, 2, 250)?;
        validation::require_text("email", &dto.email, 6, 254)?;
        validation::require_email("email", &dto.email)?;

        Ok(Self {
            name: dto.name,
            email: dto.email,
        })
    }
}
