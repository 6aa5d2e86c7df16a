//! Event factory for creating test event entities.
//!
//! Events need an initiator and a category; the factory creates a fresh location
//! unless one is provided.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDateTime, Utc};
use entity::event::EventState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, user.id, category.id)
///     .state(EventState::Published)
///     .participant_limit(2)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    initiator_id: i32,
    category_id: i32,
    location_id: Option<i32>,
    title: String,
    annotation: String,
    description: String,
    event_date: NaiveDateTime,
    paid: bool,
    participant_limit: i32,
    confirmed_requests: i32,
    request_moderation: bool,
    state: EventState,
    views: i64,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - event_date: three days from now
    /// - participant_limit: `0` (unlimited)
    /// - request_moderation: `true`
    /// - state: `Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `initiator_id` - ID of the user who owns the event
    /// - `category_id` - ID of the event's category
    pub fn new(db: &'a DatabaseConnection, initiator_id: i32, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            initiator_id,
            category_id,
            location_id: None,
            title: format!("Event {}", id),
            annotation: format!("Annotation for test event number {}", id),
            description: format!("Description for test event number {}", id),
            event_date: Utc::now().naive_utc() + Duration::days(3),
            paid: false,
            participant_limit: 0,
            confirmed_requests: 0,
            request_moderation: true,
            state: EventState::Pending,
            views: 0,
        }
    }

    pub fn location_id(mut self, location_id: i32) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn event_date(mut self, event_date: NaiveDateTime) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn participant_limit(mut self, participant_limit: i32) -> Self {
        self.participant_limit = participant_limit;
        self
    }

    pub fn confirmed_requests(mut self, confirmed_requests: i32) -> Self {
        self.confirmed_requests = confirmed_requests;
        self
    }

    pub fn request_moderation(mut self, request_moderation: bool) -> Self {
        self.request_moderation = request_moderation;
        self
    }

    /// Sets the state. Published events get a `published_on` timestamp.
    pub fn state(mut self, state: EventState) -> Self {
        self.state = state;
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let location_id = match self.location_id {
            Some(id) => id,
            None => crate::factory::location::create_location(self.db).await?.id,
        };

        let now = Utc::now().naive_utc();
        let published_on = (self.state == EventState::Published).then_some(now);

        entity::event::ActiveModel {
            annotation_search: ActiveValue::Set(self.annotation.to_lowercase()),
            annotation: ActiveValue::Set(self.annotation),
            category_id: ActiveValue::Set(self.category_id),
            confirmed_requests: ActiveValue::Set(self.confirmed_requests),
            created_on: ActiveValue::Set(now),
            description_search: ActiveValue::Set(self.description.to_lowercase()),
            description: ActiveValue::Set(self.description),
            event_date: ActiveValue::Set(self.event_date),
            initiator_id: ActiveValue::Set(self.initiator_id),
            location_id: ActiveValue::Set(location_id),
            paid: ActiveValue::Set(self.paid),
            participant_limit: ActiveValue::Set(self.participant_limit),
            published_on: ActiveValue::Set(published_on),
            request_moderation: ActiveValue::Set(self.request_moderation),
            state: ActiveValue::Set(self.state),
            title: ActiveValue::Set(self.title),
            views: ActiveValue::Set(self.views),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    initiator_id: i32,
    category_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, initiator_id, category_id).build().await
}

/// Creates a published event with default values.
pub async fn create_published_event(
    db: &DatabaseConnection,
    initiator_id: i32,
    category_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, initiator_id, category_id)
        .state(EventState::Published)
        .build()
        .await
}
