use crate::server::{
    data::comment::CommentRepository,
    model::{comment::CommentSort, pagination::Pagination},
    util::time,
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, comment::CommentFactory},
};

mod count_by_event;
mod create;
mod get_by_event;
mod update_text;
