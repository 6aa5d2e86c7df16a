//! Participation request factory.

use chrono::Utc;
use entity::participation_request::RequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating participation requests with a customizable status.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    event_id: i32,
    status: RequestStatus,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with a `Pending` status.
    pub fn new(db: &'a DatabaseConnection, requester_id: i32, event_id: i32) -> Self {
        Self {
            db,
            requester_id,
            event_id,
            status: RequestStatus::Pending,
        }
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the participation request into the database.
    pub async fn build(self) -> Result<entity::participation_request::Model, DbErr> {
        entity::participation_request::ActiveModel {
            requester_id: ActiveValue::Set(self.requester_id),
            event_id: ActiveValue::Set(self.event_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending participation request.
pub async fn create_request(
    db: &DatabaseConnection,
    requester_id: i32,
    event_id: i32,
) -> Result<entity::participation_request::Model, DbErr> {
    RequestFactory::new(db, requester_id, event_id).build().await
}
