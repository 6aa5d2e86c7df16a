//! User repository.
//!
//! Users are plain records with a unique email address. Deleting a user cascades to the
//! events they initiated and to their requests, comments and ratings.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::Pagination,
    user::{CreateUserParams, User},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Validated name and email
    ///
    /// # Returns
    /// - `Ok(User)` - Created user with assigned id
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Checks whether a user with this id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the user registered with the given email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets a window of users ordered by id.
    ///
    /// # Arguments
    /// - `ids` - When present, only users with these ids are considered
    /// - `page` - Offset and limit applied after filtering
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users in the requested window
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        ids: Option<Vec<i32>>,
        page: Pagination,
    ) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(ids) = ids {
            query = query.filter(entity::user::Column::Id.is_in(ids));
        }

        let entities = query
            .order_by_asc(entity::user::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Deletes a user, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
