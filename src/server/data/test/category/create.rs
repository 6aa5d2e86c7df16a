use super::*;

/// Tests creating a category.
///
/// Verifies that the repository inserts the row and returns the assigned id.
///
/// Expected: Ok with category stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create("Concerts".to_string()).await?;

    assert_eq!(category.name, "Concerts");

    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());

    Ok(())
}

/// Tests looking a category up by name after creation.
///
/// Expected: Ok(Some) for the stored name, Ok(None) for an unknown one
#[tokio::test]
async fn finds_created_category_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create("Theatre".to_string()).await?;

    let found = repo.find_by_name("Theatre").await?;
    assert_eq!(found.map(|c| c.id), Some(category.id));
    assert!(repo.find_by_name("Cinema").await?.is_none());

    Ok(())
}
