use super::*;

/// Tests loading an event with its relations.
///
/// Verifies that category, initiator and location are attached and the rating is the
/// average of all assessments.
///
/// Expected: Ok(Some) with relations and rating 3.0
#[tokio::test]
async fn loads_relations_and_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;
    let rater1 = factory::create_user(db).await?;
    let rater2 = factory::create_user(db).await?;
    factory::create_rating(db, rater1.id, event.id, 2).await?;
    factory::create_rating(db, rater2.id, event.id, 4).await?;

    let repo = EventRepository::new(db);
    let loaded = repo.get_by_id(event.id).await?.unwrap();

    assert_eq!(loaded.id, event.id);
    assert_eq!(loaded.category.id, category.id);
    assert_eq!(loaded.initiator.id, user.id);
    assert_eq!(loaded.initiator.name, user.name);
    assert!((loaded.rating - 3.0).abs() < f64::EPSILON);

    Ok(())
}

/// Tests that an unrated event has a zero rating.
///
/// Expected: Ok(Some) with rating 0.0
#[tokio::test]
async fn unrated_event_has_zero_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let loaded = repo.get_by_id(event.id).await?.unwrap();

    assert_eq!(loaded.rating, 0.0);

    Ok(())
}

/// Tests loading an event id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    assert!(repo.get_by_id(12).await?.is_none());

    Ok(())
}
