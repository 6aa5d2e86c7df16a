use super::*;

/// Tests reusing a stored location with identical coordinates.
///
/// Expected: Ok with the existing id and no new row
#[tokio::test]
async fn reuses_existing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::location::create_location_at(db, 10.5, 20.25).await?;

    let repo = LocationRepository::new(db);
    let id = repo
        .find_or_create(Location {
            lat: 10.5,
            lon: 20.25,
        })
        .await?;

    assert_eq!(id, existing.id);
    assert_eq!(entity::prelude::Location::find().count(db).await?, 1);

    Ok(())
}

/// Tests inserting a location for unseen coordinates.
///
/// Expected: Ok with a new id
#[tokio::test]
async fn inserts_new_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::location::create_location_at(db, 1.0, 2.0).await?;

    let repo = LocationRepository::new(db);
    let id = repo.find_or_create(Location { lat: 1.0, lon: 2.5 }).await?;

    assert_ne!(id, existing.id);
    assert_eq!(entity::prelude::Location::find().count(db).await?, 2);

    Ok(())
}
