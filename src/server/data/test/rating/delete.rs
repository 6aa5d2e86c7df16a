use super::*;

/// Tests deleting a rating by its own id.
///
/// Expected: Ok(true) and the rating gone, Ok(false) on repeat
#[tokio::test]
async fn deletes_rating_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    let rating = factory::create_rating(db, user.id, event.id, 4).await?;

    let repo = RatingRepository::new(db);
    assert!(repo.delete(rating.id).await?);
    assert!(repo.get_by_id(rating.id).await?.is_none());
    assert!(!repo.delete(rating.id).await?);

    Ok(())
}
