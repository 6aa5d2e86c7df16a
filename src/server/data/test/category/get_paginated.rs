use super::*;

/// Tests windowing over categories ordered by id.
///
/// Expected: Ok with the second and third categories
#[tokio::test]
async fn returns_requested_window_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_category(db).await?;
    let second = factory::create_category(db).await?;
    let third = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let page = repo.get_paginated(Pagination::new(1, 2).unwrap()).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, second.id);
    assert_eq!(page[1].id, third.id);
    assert!(page.iter().all(|c| c.id != first.id));

    Ok(())
}

/// Tests an offset past the last category.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let page = repo.get_paginated(Pagination::new(5, 10).unwrap()).await?;

    assert!(page.is_empty());

    Ok(())
}
