//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter constructors validate incoming DTOs so services receive well-formed input.

pub mod category;
pub mod comment;
pub mod compilation;
pub mod event;
pub mod pagination;
pub mod rating;
pub mod request;
pub mod user;
