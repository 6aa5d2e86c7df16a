use crate::server::{data::location::LocationRepository, model::event::Location};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;
