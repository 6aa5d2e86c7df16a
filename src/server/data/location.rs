use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::event::Location;

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the id of the location with exactly these coordinates, inserting it if needed.
    pub async fn find_or_create(&self, location: Location) -> Result<i32, DbErr> {
        let existing = entity::prelude::Location::find()
            .filter(entity::location::Column::Lat.eq(location.lat))
            .filter(entity::location::Column::Lon.eq(location.lon))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok(existing.id);
        }

        let created = entity::location::ActiveModel {
            lat: ActiveValue::Set(location.lat),
            lon: ActiveValue::Set(location.lon),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(created.id)
    }
}
