//! Event lifecycle: creation and editing by initiators, moderation by admins and the
//! public catalogue.

use entity::event::EventState;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::server::{
    data::{category::CategoryRepository, event::EventRepository, location::LocationRepository},
    error::AppError,
    model::{
        event::{
            require_valid_range, AdminEventFilter, CreateEventParams, Event, PublicEventFilter,
            UpdateEventParams,
        },
        pagination::Pagination,
    },
    service::user::require_user,
    util::time,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending event on behalf of `params.initiator_id`.
    ///
    /// # Returns
    /// - `Ok(Event)` - Stored event with relations
    /// - `Err(AppError::NotFound)` - Unknown initiator or category
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        debug!(initiator_id = params.initiator_id, "creating event");

        require_user(self.db, params.initiator_id).await?;
        self.require_category(params.category_id).await?;

        let location_id = LocationRepository::new(self.db)
            .find_or_create(params.location)
            .await?;

        let repo = EventRepository::new(self.db);
        let model = repo.create(params, location_id, time::now()).await?;
        info!(event_id = model.id, "event created");

        self.load(model.id).await
    }

    /// Lists the events a user initiated.
    pub async fn get_by_initiator(
        &self,
        user_id: i32,
        page: Pagination,
    ) -> Result<Vec<Event>, AppError> {
        require_user(self.db, user_id).await?;

        Ok(EventRepository::new(self.db)
            .get_by_initiator(user_id, page)
            .await?)
    }

    /// Gets one of the user's own events. Events of other users are reported as missing.
    pub async fn get_for_initiator(&self, user_id: i32, event_id: i32) -> Result<Event, AppError> {
        require_user(self.db, user_id).await?;

        let event = self.load(event_id).await?;
        if event.initiator.id != user_id {
            return Err(event_not_found(event_id));
        }

        Ok(event)
    }

    /// Applies an initiator's edit.
    ///
    /// # Returns
    /// - `Ok(Event)` - Updated event
    /// - `Err(AppError::NotFound)` - Unknown user, event or new category
    /// - `Err(AppError::BadRequest)` - The user did not initiate the event
    /// - `Err(AppError::Conflict)` - The event is already published
    pub async fn update_by_initiator(
        &self,
        user_id: i32,
        event_id: i32,
        params: UpdateEventParams,
    ) -> Result<Event, AppError> {
        debug!(user_id, event_id, "initiator updating event");
        require_user(self.db, user_id).await?;

        let repo = EventRepository::new(self.db);
        let event = repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;

        if event.initiator_id != user_id {
            return Err(AppError::BadRequest(format!(
                "User with id={} is not the initiator of event with id={}",
                user_id, event_id
            )));
        }
        if event.state == EventState::Published {
            return Err(AppError::Conflict(
                "Only pending or canceled events can be changed".to_string(),
            ));
        }

        self.apply_update(event, params).await?;
        info!(event_id, "event updated by initiator");

        self.load(event_id).await
    }

    /// Searches all events regardless of state.
    pub async fn search_admin(&self, filter: AdminEventFilter) -> Result<Vec<Event>, AppError> {
        require_valid_range(filter.range_start, filter.range_end)?;

        Ok(EventRepository::new(self.db).search_admin(filter).await?)
    }

    /// Applies an admin's edit, including publication and rejection.
    pub async fn update_by_admin(
        &self,
        event_id: i32,
        params: UpdateEventParams,
    ) -> Result<Event, AppError> {
        debug!(event_id, "admin updating event");

        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;

        self.apply_update(event, params).await?;
        info!(event_id, "event updated by admin");

        self.load(event_id).await
    }

    /// Searches published events.
    pub async fn search_public(&self, filter: PublicEventFilter) -> Result<Vec<Event>, AppError> {
        require_valid_range(filter.range_start, filter.range_end)?;

        Ok(EventRepository::new(self.db)
            .search_public(filter, time::now())
            .await?)
    }

    /// Gets a published event and counts the view.
    pub async fn get_published(&self, event_id: i32) -> Result<Event, AppError> {
        let mut event = self.load(event_id).await?;
        if event.state != EventState::Published {
            return Err(event_not_found(event_id));
        }

        event.views += 1;
        EventRepository::new(self.db)
            .set_views(event_id, event.views)
            .await?;

        Ok(event)
    }

    async fn apply_update(
        &self,
        event: entity::event::Model,
        mut params: UpdateEventParams,
    ) -> Result<(), AppError> {
        if let Some(category_id) = params.category_id {
            self.require_category(category_id).await?;
        }

        let location_id = match params.location.take() {
            Some(location) => Some(
                LocationRepository::new(self.db)
                    .find_or_create(location)
                    .await?,
            ),
            None => None,
        };

        let transition = params
            .state_action
            .map(|action| action.apply(event.state, time::now()))
            .transpose()?;

        EventRepository::new(self.db)
            .update(event, params, location_id, transition)
            .await?;

        Ok(())
    }

    async fn require_category(&self, category_id: i32) -> Result<(), AppError> {
        if CategoryRepository::new(self.db)
            .get_by_id(category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Category with id={} was not found",
                category_id
            )));
        }

        Ok(())
    }

    async fn load(&self, event_id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))
    }
}

pub(crate) fn event_not_found(event_id: i32) -> AppError {
    AppError::NotFound(format!("Event with id={} was not found", event_id))
}
