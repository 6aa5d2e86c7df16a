//! Wire types exchanged with API clients.
//!
//! DTOs serialize with camelCase field names and carry `utoipa::ToSchema` so they appear
//! in the generated OpenAPI document. Timestamps use the `yyyy-MM-dd HH:mm:ss` layout
//! provided by [`datetime`].

pub mod api;
pub mod category;
pub mod comment;
pub mod compilation;
pub mod datetime;
pub mod event;
pub mod rating;
pub mod request;
pub mod user;
