use super::*;

/// Tests counting comments per event.
///
/// Expected: Ok(2) for the commented event, Ok(0) for the other
#[tokio::test]
async fn counts_comments_of_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;
    let quiet = factory::create_published_event(db, user.id, category.id).await?;
    factory::create_comment(db, user.id, event.id).await?;
    CommentFactory::new(db, user.id, event.id)
        .text("Second")
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.count_by_event(event.id).await?, 2);
    assert_eq!(repo.count_by_event(quiet.id).await?, 0);

    Ok(())
}
