//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the service layer free of persistence details. Every repository is
//! generic over `ConnectionTrait`, so the same code runs against the pool or inside a
//! transaction.

pub mod category;
pub mod comment;
pub mod compilation;
pub mod event;
pub mod location;
pub mod rating;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
