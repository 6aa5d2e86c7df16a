use crate::server::{data::compilation::CompilationRepository, model::pagination::Pagination};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, compilation::CompilationFactory},
};

mod delete;
mod get_paginated;
mod set_events;
mod update;
