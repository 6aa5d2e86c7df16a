use super::*;

/// Tests storing and changing a rating.
///
/// Expected: Ok with the changed assessment persisted
#[tokio::test]
async fn creates_and_updates_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = RatingRepository::new(db);
    let rating = repo.create(user.id, event.id, 3).await?;
    assert_eq!(rating.assessment, 3);

    let updated = repo.update_assessment(rating.id, 5).await?;
    assert_eq!(updated.id, rating.id);
    assert_eq!(updated.assessment, 5);

    let found = repo.find_by_user_and_event(user.id, event.id).await?;
    assert_eq!(found.map(|r| r.assessment), Some(5));

    Ok(())
}
