//! SeaORM entity definitions for the eventboard schema.

pub mod prelude;

pub mod category;
pub mod comment;
pub mod compilation;
pub mod compilation_event;
pub mod event;
pub mod location;
pub mod participation_request;
pub mod rating;
pub mod user;
