//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing ownership, state and capacity rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Transaction Management**: Keeping participant counters consistent with requests

pub mod category;
pub mod comment;
pub mod compilation;
pub mod event;
pub mod rating;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
