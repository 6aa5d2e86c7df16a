use crate::server::{data::request::RequestRepository, util::time};
use entity::participation_request::RequestStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, request::RequestFactory},
};

mod create;
mod get_pending_by_event;
mod set_status;
