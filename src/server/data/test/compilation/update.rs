use super::*;

/// Tests changing only the pinned flag.
///
/// Expected: Ok with the title kept
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let compilation = CompilationFactory::new(db)
        .title("Summer")
        .build()
        .await?;

    let repo = CompilationRepository::new(db);
    let updated = repo.update(compilation.id, None, Some(true)).await?;

    assert_eq!(updated.title, "Summer");
    assert!(updated.pinned);

    Ok(())
}

/// Tests updating a compilation that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_compilation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompilationRepository::new(db);
    let result = repo.update(5, Some("Winter".to_string()), None).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
