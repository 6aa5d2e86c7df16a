//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments with customizable text.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    event_id: i32,
    text: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default text `"Comment {id}"`.
    pub fn new(db: &'a DatabaseConnection, author_id: i32, event_id: i32) -> Self {
        Self {
            db,
            author_id,
            event_id,
            text: format!("Comment {}", next_id()),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds and inserts the comment into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(self.text),
            author_id: ActiveValue::Set(self.author_id),
            event_id: ActiveValue::Set(self.event_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            updated: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default text.
pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: i32,
    event_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, author_id, event_id).build().await
}
