use super::*;

/// Tests renaming an existing category.
///
/// Expected: Ok with the new name persisted
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo.update(category.id, "Exhibitions".to_string()).await?;

    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Exhibitions");

    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_category.name, "Exhibitions");

    Ok(())
}

/// Tests renaming a category that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.update(999, "Nothing".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
