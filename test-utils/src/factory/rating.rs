//! Rating factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a rating with the given assessment.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the rating user
/// - `event_id` - ID of the rated event
/// - `assessment` - Score between 0 and 5
///
/// # Returns
/// - `Ok(entity::rating::Model)` - Created rating entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_rating(
    db: &DatabaseConnection,
    user_id: i32,
    event_id: i32,
    assessment: i32,
) -> Result<entity::rating::Model, DbErr> {
    entity::rating::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        event_id: ActiveValue::Set(event_id),
        assessment: ActiveValue::Set(assessment),
        ..Default::default()
    }
    .insert(db)
    .await
}
