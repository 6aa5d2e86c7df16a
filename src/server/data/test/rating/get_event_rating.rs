use super::*;

/// Tests aggregating the assessments of one event.
///
/// Expected: Ok with the average and count of that event only
#[tokio::test]
async fn aggregates_event_assessments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;
    let other_event = factory::create_published_event(db, user.id, category.id).await?;
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_rating(db, a.id, event.id, 5).await?;
    factory::create_rating(db, b.id, event.id, 2).await?;
    factory::create_rating(db, a.id, other_event.id, 0).await?;

    let repo = RatingRepository::new(db);
    let rating = repo.get_event_rating(event.id).await?;

    assert_eq!(rating.count, 2);
    assert!((rating.average - 3.5).abs() < f64::EPSILON);

    let unrated = repo.get_event_rating(9999).await?;
    assert_eq!(unrated.count, 0);
    assert_eq!(unrated.average, 0.0);

    Ok(())
}
