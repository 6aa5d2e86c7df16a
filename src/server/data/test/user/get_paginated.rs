use super::*;

/// Tests listing all users without an id filter.
///
/// Expected: Ok with every user in id order
#[tokio::test]
async fn lists_all_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_paginated(None, Pagination::default()).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests restricting the listing to specific ids.
///
/// Expected: Ok with only the requested users
#[tokio::test]
async fn filters_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo
        .get_paginated(Some(vec![third.id, first.id]), Pagination::default())
        .await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}
