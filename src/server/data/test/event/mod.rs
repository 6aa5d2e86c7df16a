use crate::server::{
    data::event::EventRepository,
    model::{
        event::{
            AdminEventFilter, CreateEventParams, EventSort, Location, PublicEventFilter,
            StateTransition, UpdateEventParams,
        },
        pagination::Pagination,
    },
    util::time,
};
use chrono::{Duration, Utc};
use entity::event::EventState;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, event::EventFactory},
};

mod create;
mod get_by_id;
mod search_admin;
mod search_public;
mod update;
