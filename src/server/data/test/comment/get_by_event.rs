use super::*;

/// Inserts three comments on one event with distinct creation times and returns their
/// ids in creation order.
async fn seed_comments(db: &sea_orm::DatabaseConnection) -> Result<(i32, Vec<i32>), DbErr> {
    let (user, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let repo = CommentRepository::new(db);
    let now = time::now();

    // Inserted out of chronological order so id and date orderings differ.
    let middle = repo
        .create(user.id, event.id, "middle".to_string(), now - Duration::hours(1))
        .await?;
    let oldest = repo
        .create(user.id, event.id, "oldest".to_string(), now - Duration::hours(2))
        .await?;
    let newest = repo
        .create(user.id, event.id, "newest".to_string(), now)
        .await?;

    Ok((event.id, vec![oldest.id, middle.id, newest.id]))
}

/// Tests the default ordering.
///
/// Expected: Ok with comments newest id first
#[tokio::test]
async fn defaults_to_newest_id_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event_id, _) = seed_comments(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo
        .get_by_event(event_id, None, Pagination::default())
        .await?;

    let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["newest", "oldest", "middle"]);

    Ok(())
}

/// Tests both date orderings.
///
/// Expected: DATE_ASC oldest first, DATE_DESC newest first
#[tokio::test]
async fn sorts_by_creation_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event_id, chronological) = seed_comments(db).await?;

    let repo = CommentRepository::new(db);
    let ascending: Vec<i32> = repo
        .get_by_event(event_id, Some(CommentSort::DateAsc), Pagination::default())
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let descending: Vec<i32> = repo
        .get_by_event(event_id, Some(CommentSort::DateDesc), Pagination::default())
        .await?
        .iter()
        .map(|c| c.id)
        .collect();

    let mut reversed = chronological.clone();
    reversed.reverse();
    assert_eq!(ascending, chronological);
    assert_eq!(descending, reversed);

    Ok(())
}
