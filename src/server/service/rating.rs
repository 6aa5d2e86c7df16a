use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::server::{
    data::{event::EventRepository, rating::RatingRepository},
    error::AppError,
    model::rating::{AssessmentParams, EventRating, Rating},
    service::{event::event_not_found, user::require_user},
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a user's assessment of an event.
    ///
    /// # Returns
    /// - `Ok(Rating)` - Stored rating
    /// - `Err(AppError::NotFound)` - Unknown user or event
    /// - `Err(AppError::Conflict)` - The user initiated the event or already rated it
    pub async fn create(
        &self,
        user_id: i32,
        event_id: i32,
        params: AssessmentParams,
    ) -> Result<Rating, AppError> {
        debug!(user_id, event_id, "rating event");

        require_user(self.db, user_id).await?;
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;

        if event.initiator_id == user_id {
            return Err(AppError::Conflict(
                "The initiator cannot rate their own event".to_string(),
            ));
        }

        let repo = RatingRepository::new(self.db);
        if repo
            .find_by_user_and_event(user_id, event_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "User with id={} has already rated event with id={}",
                user_id, event_id
            )));
        }

        let rating = repo.create(user_id, event_id, params.assessment).await?;
        info!(rating_id = rating.id, "rating created");

        Ok(rating)
    }

    /// Changes the assessment of the user's own rating.
    pub async fn update(
        &self,
        user_id: i32,
        rating_id: i32,
        params: AssessmentParams,
    ) -> Result<Rating, AppError> {
        debug!(user_id, rating_id, "changing rating");

        let repo = RatingRepository::new(self.db);
        self.require_authored(&repo, user_id, rating_id).await?;

        let rating = repo.update_assessment(rating_id, params.assessment).await?;
        info!(rating_id, "rating changed");

        Ok(rating)
    }

    /// Removes the user's own rating.
    pub async fn delete(&self, user_id: i32, rating_id: i32) -> Result<(), AppError> {
        debug!(user_id, rating_id, "deleting rating");

        let repo = RatingRepository::new(self.db);
        self.require_authored(&repo, user_id, rating_id).await?;

        repo.delete(rating_id).await?;
        info!(rating_id, "rating deleted");

        Ok(())
    }

    /// Average and number of assessments of an event.
    pub async fn get_event_rating(&self, event_id: i32) -> Result<EventRating, AppError> {
        if EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(event_not_found(event_id));
        }

        Ok(RatingRepository::new(self.db)
            .get_event_rating(event_id)
            .await?)
    }

    async fn require_authored(
        &self,
        repo: &RatingRepository<'_, DatabaseConnection>,
        user_id: i32,
        rating_id: i32,
    ) -> Result<Rating, AppError> {
        let rating = repo.get_by_id(rating_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Rating with id={} was not found", rating_id))
        })?;

        if rating.user_id != user_id {
            return Err(AppError::Conflict(format!(
                "User with id={} is not the author of rating with id={}",
                user_id, rating_id
            )));
        }

        Ok(rating)
    }
}
