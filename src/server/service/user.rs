use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::Pagination,
        user::{CreateUserParams, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user with a unique email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        debug!(email = %params.email, "creating user");
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                params.email
            )));
        }

        let user = repo.create(params).await?;
        info!(user_id = user.id, "user created");

        Ok(user)
    }

    /// Lists users ordered by id, restricted to `ids` when given
    pub async fn get_paginated(
        &self,
        ids: Option<Vec<i32>>,
        page: Pagination,
    ) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_paginated(ids, page).await?)
    }

    /// Deletes a user together with everything they own
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        debug!(user_id = id, "deleting user");

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!(
                "User with id={} was not found",
                id
            )));
        }
        info!(user_id = id, "user deleted");

        Ok(())
    }
}

/// Fails with `NotFound` unless the user exists.
///
/// Shared by services that act on behalf of a user.
pub(crate) async fn require_user<C: sea_orm::ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<(), AppError> {
    if !UserRepository::new(db).exists(id).await? {
        return Err(AppError::NotFound(format!(
            "User with id={} was not found",
            id
        )));
    }

    Ok(())
}
