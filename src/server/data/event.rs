//! Event repository.
//!
//! Queries return bare `entity::event::Model` rows where services only need to inspect
//! ownership or state, and fully loaded `Event` domain models for anything that is
//! rendered. Relations are fetched in batches keyed by id so a page of events costs a
//! fixed number of queries.

use chrono::NaiveDateTime;
use entity::event::EventState;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::{
    category::Category,
    event::{
        AdminEventFilter, CreateEventParams, Event, EventSort, Location, PublicEventFilter,
        StateTransition, UpdateEventParams,
    },
    pagination::Pagination,
    rating::EventRating,
    user::UserShort,
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending event.
    ///
    /// # Arguments
    /// - `params` - Validated event fields
    /// - `location_id` - Id of the already stored location
    /// - `created_on` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted row with `confirmed_requests = 0` and `views = 0`
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(
        &self,
        params: CreateEventParams,
        location_id: i32,
        created_on: NaiveDateTime,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            annotation_search: ActiveValue::Set(params.annotation.to_lowercase()),
            annotation: ActiveValue::Set(params.annotation),
            category_id: ActiveValue::Set(params.category_id),
            confirmed_requests: ActiveValue::Set(0),
            created_on: ActiveValue::Set(created_on),
            description_search: ActiveValue::Set(params.description.to_lowercase()),
            description: ActiveValue::Set(params.description),
            event_date: ActiveValue::Set(params.event_date),
            initiator_id: ActiveValue::Set(params.initiator_id),
            location_id: ActiveValue::Set(location_id),
            paid: ActiveValue::Set(params.paid),
            participant_limit: ActiveValue::Set(params.participant_limit),
            published_on: ActiveValue::Set(None),
            request_moderation: ActiveValue::Set(params.request_moderation),
            state: ActiveValue::Set(EventState::Pending),
            title: ActiveValue::Set(params.title),
            views: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the bare event row.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets an event with its relations loaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        match self.find_by_id(id).await? {
            Some(model) => Ok(self.load_relations(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Gets events by id with relations loaded, ordered by id.
    ///
    /// Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Event>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(ids))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(models).await
    }

    /// Returns the subset of `ids` that belong to stored events.
    pub async fn existing_ids(&self, ids: Vec<i32>) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(ids))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.id).collect())
    }

    /// Gets a window of the events a user initiated, ordered by id.
    pub async fn get_by_initiator(
        &self,
        initiator_id: i32,
        page: Pagination,
    ) -> Result<Vec<Event>, DbErr> {
        let models = entity::prelude::Event::find()
            .filter(entity::event::Column::InitiatorId.eq(initiator_id))
            .order_by_asc(entity::event::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        self.load_relations(models).await
    }

    /// Searches events for administration, newest id first.
    pub async fn search_admin(&self, filter: AdminEventFilter) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(users) = filter.users {
            query = query.filter(entity::event::Column::InitiatorId.is_in(users));
        }
        if let Some(states) = filter.states {
            query = query.filter(entity::event::Column::State.is_in(states));
        }
        if let Some(categories) = filter.categories {
            query = query.filter(entity::event::Column::CategoryId.is_in(categories));
        }
        if let Some(start) = filter.range_start {
            query = query.filter(entity::event::Column::EventDate.gte(start));
        }
        if let Some(end) = filter.range_end {
            query = query.filter(entity::event::Column::EventDate.lte(end));
        }

        let models = query
            .order_by_desc(entity::event::Column::Id)
            .offset(filter.pagination.offset)
            .limit(filter.pagination.limit)
            .all(self.db)
            .await?;

        self.load_relations(models).await
    }

    /// Searches published events for the public listing.
    ///
    /// `text` is matched case-insensitively against the lowercased search columns.
    /// Without a date range only events after `now` are returned. `EVENT_DATE` and `VIEWS`
    /// orderings are applied in the query; `RATINGS` orders the fetched page by average
    /// assessment.
    pub async fn search_public(
        &self,
        filter: PublicEventFilter,
        now: NaiveDateTime,
    ) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::State.eq(EventState::Published));

        if let Some(text) = filter.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = contains_pattern(text);
            query = query.filter(
                Condition::any()
                    .add(
                        entity::event::Column::AnnotationSearch
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                    .add(
                        entity::event::Column::DescriptionSearch
                            .like(LikeExpr::new(pattern).escape('\\')),
                    ),
            );
        }
        if let Some(categories) = filter.categories {
            query = query.filter(entity::event::Column::CategoryId.is_in(categories));
        }
        if let Some(paid) = filter.paid {
            query = query.filter(entity::event::Column::Paid.eq(paid));
        }
        match (filter.range_start, filter.range_end) {
            (None, None) => {
                query = query.filter(entity::event::Column::EventDate.gt(now));
            }
            (start, end) => {
                if let Some(start) = start {
                    query = query.filter(entity::event::Column::EventDate.gte(start));
                }
                if let Some(end) = end {
                    query = query.filter(entity::event::Column::EventDate.lte(end));
                }
            }
        }
        if filter.only_available {
            query = query.filter(
                Condition::any()
                    .add(entity::event::Column::ParticipantLimit.eq(0))
                    .add(Expr::cust("confirmed_requests < participant_limit")),
            );
        }

        query = match filter.sort {
            Some(EventSort::EventDate) => query
                .order_by_asc(entity::event::Column::EventDate)
                .order_by_asc(entity::event::Column::Id),
            Some(EventSort::Views) => query
                .order_by_desc(entity::event::Column::Views)
                .order_by_desc(entity::event::Column::Id),
            Some(EventSort::Ratings) | None => query.order_by_desc(entity::event::Column::Id),
        };

        let models = query
            .offset(filter.pagination.offset)
            .limit(filter.pagination.limit)
            .all(self.db)
            .await?;

        let mut events = self.load_relations(models).await?;

        if filter.sort == Some(EventSort::Ratings) {
            events.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }

        Ok(events)
    }

    /// Applies a partial update and optional state transition.
    ///
    /// # Arguments
    /// - `event` - Current row
    /// - `params` - Fields to overwrite, `None` keeps the stored value
    /// - `location_id` - Replacement location, already stored
    /// - `transition` - New state and publication time
    pub async fn update(
        &self,
        event: entity::event::Model,
        params: UpdateEventParams,
        location_id: Option<i32>,
        transition: Option<StateTransition>,
    ) -> Result<entity::event::Model, DbErr> {
        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(annotation) = params.annotation {
            active_model.annotation_search = ActiveValue::Set(annotation.to_lowercase());
            active_model.annotation = ActiveValue::Set(annotation);
        }
        if let Some(category_id) = params.category_id {
            active_model.category_id = ActiveValue::Set(category_id);
        }
        if let Some(description) = params.description {
            active_model.description_search = ActiveValue::Set(description.to_lowercase());
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(event_date) = params.event_date {
            active_model.event_date = ActiveValue::Set(event_date);
        }
        if let Some(location_id) = location_id {
            active_model.location_id = ActiveValue::Set(location_id);
        }
        if let Some(paid) = params.paid {
            active_model.paid = ActiveValue::Set(paid);
        }
        if let Some(limit) = params.participant_limit {
            active_model.participant_limit = ActiveValue::Set(limit);
        }
        if let Some(moderation) = params.request_moderation {
            active_model.request_moderation = ActiveValue::Set(moderation);
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(transition) = transition {
            active_model.state = ActiveValue::Set(transition.state);
            if transition.published_on.is_some() {
                active_model.published_on = ActiveValue::Set(transition.published_on);
            }
        }

        active_model.update(self.db).await
    }

    /// Overwrites the confirmed participant counter.
    pub async fn set_confirmed_requests(&self, id: i32, confirmed: i32) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .filter(entity::event::Column::Id.eq(id))
            .col_expr(
                entity::event::Column::ConfirmedRequests,
                Expr::value(confirmed),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stores a new view count for the event.
    pub async fn set_views(&self, id: i32, views: i64) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .filter(entity::event::Column::Id.eq(id))
            .col_expr(entity::event::Column::Views, Expr::value(views))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Loads category, initiator, location and rating for each row, keeping row order.
    async fn load_relations(&self, models: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let category_ids: Vec<i32> = models.iter().map(|m| m.category_id).collect();
        let initiator_ids: Vec<i32> = models.iter().map(|m| m.initiator_id).collect();
        let location_ids: Vec<i32> = models.iter().map(|m| m.location_id).collect();

        let categories: HashMap<i32, entity::category::Model> = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let initiators: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(initiator_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let locations: HashMap<i32, entity::location::Model> = entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(location_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        let mut assessments: HashMap<i32, Vec<i32>> = HashMap::new();
        for rating in entity::prelude::Rating::find()
            .filter(entity::rating::Column::EventId.is_in(event_ids))
            .all(self.db)
            .await?
        {
            assessments
                .entry(rating.event_id)
                .or_default()
                .push(rating.assessment);
        }

        models
            .into_iter()
            .map(|model| {
                let category = categories.get(&model.category_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Category {} of event {} not found",
                        model.category_id, model.id
                    ))
                })?;
                let initiator = initiators.get(&model.initiator_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Initiator {} of event {} not found",
                        model.initiator_id, model.id
                    ))
                })?;
                let location = locations.get(&model.location_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Location {} of event {} not found",
                        model.location_id, model.id
                    ))
                })?;
                let rating = assessments
                    .get(&model.id)
                    .map(|a| EventRating::from_assessments(a))
                    .unwrap_or_default();

                Ok(Event::from_entity(
                    model,
                    Category::from_entity(category),
                    UserShort::from_entity(initiator),
                    Location::from_entity(location),
                    rating.average,
                ))
            })
            .collect()
    }
}

/// Lowercases `text` and wraps it in `%` for a substring `LIKE` with `\` as escape
/// character. Wildcards typed by the user match literally.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}
