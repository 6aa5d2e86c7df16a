use super::*;

/// Tests the pinned filter and ordering.
///
/// Expected: Ok with pinned compilations only, newest first
#[tokio::test]
async fn filters_by_pinned_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = CompilationFactory::new(db).pinned(true).build().await?;
    factory::create_compilation(db).await?;
    let newer = CompilationFactory::new(db).pinned(true).build().await?;

    let repo = CompilationRepository::new(db);
    let pinned = repo
        .get_paginated(Some(true), Pagination::default())
        .await?;

    let ids: Vec<i32> = pinned.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let all = repo.get_paginated(None, Pagination::default()).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
