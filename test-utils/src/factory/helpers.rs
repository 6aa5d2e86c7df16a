//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pending event together with its initiator and category.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((initiator, category, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let initiator = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let event = crate::factory::event::create_event(db, initiator.id, category.id).await?;

    Ok((initiator, category, event))
}

/// Creates a published event together with its initiator and category.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((initiator, category, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_published_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let initiator = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let event =
        crate::factory::event::create_published_event(db, initiator.id, category.id).await?;

    Ok((initiator, category, event))
}
