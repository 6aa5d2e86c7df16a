use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    comment::{Comment, CommentSort},
    pagination::Pagination,
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        author_id: i32,
        event_id: i32,
        text: String,
        created: NaiveDateTime,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            text: ActiveValue::Set(text),
            author_id: ActiveValue::Set(author_id),
            event_id: ActiveValue::Set(event_id),
            created: ActiveValue::Set(created),
            updated: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Replaces the comment text and marks it as edited.
    pub async fn update_text(&self, id: i32, text: String) -> Result<Comment, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found",
                id
            )))?;

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.text = ActiveValue::Set(text);
        active_model.updated = ActiveValue::Set(true);

        let entity = active_model.update(self.db).await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a window of an event's comments.
    ///
    /// `DateAsc`/`DateDesc` order by creation time; without a sort the newest id comes first.
    pub async fn get_by_event(
        &self,
        event_id: i32,
        sort: Option<CommentSort>,
        page: Pagination,
    ) -> Result<Vec<Comment>, DbErr> {
        let query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::EventId.eq(event_id));

        let query = match sort {
            Some(CommentSort::DateAsc) => query
                .order_by_asc(entity::comment::Column::Created)
                .order_by_asc(entity::comment::Column::Id),
            Some(CommentSort::DateDesc) => query
                .order_by_desc(entity::comment::Column::Created)
                .order_by_desc(entity::comment::Column::Id),
            None => query.order_by_desc(entity::comment::Column::Id),
        };

        let entities = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }
}
