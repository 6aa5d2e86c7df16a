//! HTTP request handlers.
//!
//! Controllers turn path, query and body input into operation parameters, call the
//! matching service and convert the returned domain models into DTOs. Each handler is
//! annotated with `#[utoipa::path]` so the router can assemble the OpenAPI document from
//! the handlers themselves.
//!
//! Input never reaches a handler through a plain axum extractor: [`extract`] wraps
//! `Json`, `Query` and `Path` so malformed input answers with the same `ErrorDto` body
//! as every other failure.

pub mod category;
pub mod comment;
pub mod compilation;
pub mod event;
pub mod extract;
pub mod param;
pub mod rating;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
