use super::*;

/// Tests deleting an existing category.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.delete(category.id).await?);

    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_none());

    Ok(())
}

/// Tests deleting a category id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    assert!(!repo.delete(42).await?);

    Ok(())
}
