use chrono::NaiveDateTime;
use entity::participation_request::RequestStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::request::ParticipationRequest;

pub struct RequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a participation request with the given status.
    pub async fn create(
        &self,
        requester_id: i32,
        event_id: i32,
        status: RequestStatus,
        created: NaiveDateTime,
    ) -> Result<ParticipationRequest, DbErr> {
        let entity = entity::participation_request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            event_id: ActiveValue::Set(event_id),
            created: ActiveValue::Set(created),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ParticipationRequest::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ParticipationRequest>, DbErr> {
        let entity = entity::prelude::ParticipationRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ParticipationRequest::from_entity))
    }

    /// Finds the request a user made for an event, if any.
    pub async fn find_by_requester_and_event(
        &self,
        requester_id: i32,
        event_id: i32,
    ) -> Result<Option<ParticipationRequest>, DbErr> {
        let entity = entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::RequesterId.eq(requester_id))
            .filter(entity::participation_request::Column::EventId.eq(event_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ParticipationRequest::from_entity))
    }

    /// Gets every request a user made, ordered by id.
    pub async fn get_by_requester(
        &self,
        requester_id: i32,
    ) -> Result<Vec<ParticipationRequest>, DbErr> {
        let entities = entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::RequesterId.eq(requester_id))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParticipationRequest::from_entity)
            .collect())
    }

    /// Gets every request made for an event, ordered by id.
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<ParticipationRequest>, DbErr> {
        let entities = entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::EventId.eq(event_id))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParticipationRequest::from_entity)
            .collect())
    }

    /// Gets requests by id, ordered by id. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<ParticipationRequest>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::Id.is_in(ids))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParticipationRequest::from_entity)
            .collect())
    }

    /// Gets the pending requests of an event, ordered by id.
    pub async fn get_pending_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<ParticipationRequest>, DbErr> {
        let entities = entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::EventId.eq(event_id))
            .filter(entity::participation_request::Column::Status.eq(RequestStatus::Pending))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParticipationRequest::from_entity)
            .collect())
    }

    /// Sets the status of every listed request.
    pub async fn set_status(&self, ids: Vec<i32>, status: RequestStatus) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::ParticipationRequest::update_many()
            .filter(entity::participation_request::Column::Id.is_in(ids))
            .col_expr(
                entity::participation_request::Column::Status,
                Expr::value(status),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
