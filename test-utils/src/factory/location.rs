//! Location factory for creating test location entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a location with the given coordinates.
///
/// # Arguments
/// - `db` - Database connection
/// - `lat` - Latitude
/// - `lon` - Longitude
///
/// # Returns
/// - `Ok(entity::location::Model)` - Created location entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_location_at(
    db: &DatabaseConnection,
    lat: f64,
    lon: f64,
) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        lat: ActiveValue::Set(lat),
        lon: ActiveValue::Set(lon),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a location at a fixed default coordinate.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    create_location_at(db, 55.754167, 37.62).await
}
