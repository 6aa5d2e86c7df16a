use crate::server::{data::category::CategoryRepository, model::pagination::Pagination};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod has_events;
mod update;
