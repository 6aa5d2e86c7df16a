use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::rating::{EventRating, Rating};

pub struct RatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        event_id: i32,
        assessment: i32,
    ) -> Result<Rating, DbErr> {
        let entity = entity::rating::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            assessment: ActiveValue::Set(assessment),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rating::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Rating>, DbErr> {
        let entity = entity::prelude::Rating::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rating::from_entity))
    }

    /// Finds the rating a user gave an event, if any.
    pub async fn find_by_user_and_event(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<Rating>, DbErr> {
        let entity = entity::prelude::Rating::find()
            .filter(entity::rating::Column::UserId.eq(user_id))
            .filter(entity::rating::Column::EventId.eq(event_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Rating::from_entity))
    }

    pub async fn update_assessment(&self, id: i32, assessment: i32) -> Result<Rating, DbErr> {
        let rating = entity::prelude::Rating::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Rating with id {} not found",
                id
            )))?;

        let mut active_model: entity::rating::ActiveModel = rating.into();
        active_model.assessment = ActiveValue::Set(assessment);

        let entity = active_model.update(self.db).await?;

        Ok(Rating::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rating::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Aggregates every assessment of an event.
    pub async fn get_event_rating(&self, event_id: i32) -> Result<EventRating, DbErr> {
        let assessments: Vec<i32> = entity::prelude::Rating::find()
            .filter(entity::rating::Column::EventId.eq(event_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.assessment)
            .collect();

        Ok(EventRating::from_assessments(&assessments))
    }
}
