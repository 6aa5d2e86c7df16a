use super::*;

/// Tests detecting events that reference a category.
///
/// Expected: true for the used category, false for an unused one
#[tokio::test]
async fn detects_referencing_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, used, _) = factory::helpers::create_event_with_dependencies(db).await?;
    let unused = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.has_events(used.id).await?);
    assert!(!repo.has_events(unused.id).await?);

    Ok(())
}
