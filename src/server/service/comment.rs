use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::server::{
    data::{comment::CommentRepository, event::EventRepository},
    error::AppError,
    model::{
        comment::{Comment, CommentSort, CommentTextParams},
        pagination::Pagination,
    },
    service::{event::event_not_found, user::require_user},
    util::time,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment from `user_id` on `event_id`.
    pub async fn create(
        &self,
        user_id: i32,
        event_id: i32,
        params: CommentTextParams,
    ) -> Result<Comment, AppError> {
        debug!(user_id, event_id, "creating comment");

        require_user(self.db, user_id).await?;
        self.require_event(event_id).await?;

        let comment = CommentRepository::new(self.db)
            .create(user_id, event_id, params.text, time::now())
            .await?;
        info!(comment_id = comment.id, "comment created");

        Ok(comment)
    }

    /// Replaces the text of the user's own comment and marks it edited.
    pub async fn update(
        &self,
        user_id: i32,
        comment_id: i32,
        params: CommentTextParams,
    ) -> Result<Comment, AppError> {
        debug!(user_id, comment_id, "editing comment");

        require_user(self.db, user_id).await?;
        let repo = CommentRepository::new(self.db);
        let comment = self.require_authored(&repo, user_id, comment_id).await?;

        let comment = repo.update_text(comment.id, params.text).await?;
        info!(comment_id, "comment edited");

        Ok(comment)
    }

    /// Deletes the user's own comment.
    pub async fn delete_by_author(&self, user_id: i32, comment_id: i32) -> Result<(), AppError> {
        debug!(user_id, comment_id, "author deleting comment");

        let repo = CommentRepository::new(self.db);
        self.require_authored(&repo, user_id, comment_id).await?;

        repo.delete(comment_id).await?;
        info!(comment_id, "comment deleted by author");

        Ok(())
    }

    /// Deletes any comment.
    pub async fn delete_by_admin(&self, comment_id: i32) -> Result<(), AppError> {
        debug!(comment_id, "admin deleting comment");

        if !CommentRepository::new(self.db).delete(comment_id).await? {
            return Err(comment_not_found(comment_id));
        }
        info!(comment_id, "comment deleted by admin");

        Ok(())
    }

    pub async fn get_by_event(
        &self,
        event_id: i32,
        sort: Option<CommentSort>,
        page: Pagination,
    ) -> Result<Vec<Comment>, AppError> {
        self.require_event(event_id).await?;

        Ok(CommentRepository::new(self.db)
            .get_by_event(event_id, sort, page)
            .await?)
    }

    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, AppError> {
        self.require_event(event_id).await?;

        Ok(CommentRepository::new(self.db)
            .count_by_event(event_id)
            .await?)
    }

    async fn require_authored(
        &self,
        repo: &CommentRepository<'_, DatabaseConnection>,
        user_id: i32,
        comment_id: i32,
    ) -> Result<Comment, AppError> {
        let comment = repo
            .get_by_id(comment_id)
            .await?
            .ok_or_else(|| comment_not_found(comment_id))?;

        if comment.author_id != user_id {
            return Err(AppError::Conflict(format!(
                "User with id={} is not the author of comment with id={}",
                user_id, comment_id
            )));
        }

        Ok(comment)
    }

    async fn require_event(&self, event_id: i32) -> Result<(), AppError> {
        if EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(event_not_found(event_id));
        }

        Ok(())
    }
}

fn comment_not_found(comment_id: i32) -> AppError {
    AppError::NotFound(format!("Comment with id={} was not found", comment_id))
}
