use super::*;

/// Tests that deleting a user removes the events they initiated.
///
/// Expected: Ok(true) and no events left
#[tokio::test]
async fn deletes_user_and_cascades_to_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(!repo.exists(user.id).await?);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.delete(7).await?);

    Ok(())
}
