use super::*;

/// Tests the admin search without filters.
///
/// Expected: Ok with every event, newest id first
#[tokio::test]
async fn returns_all_events_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_published_event(db, user.id, category.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.search_admin(AdminEventFilter::default()).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests combining initiator, state and category filters.
///
/// Expected: Ok with only the matching event
#[tokio::test]
async fn filters_by_users_states_and_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, _pending) = factory::helpers::create_event_with_dependencies(db).await?;
    let published = factory::create_published_event(db, user.id, category.id).await?;
    let (_, _, _other) = factory::helpers::create_published_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let events = repo
        .search_admin(AdminEventFilter {
            users: Some(vec![user.id]),
            states: Some(vec![EventState::Published]),
            categories: Some(vec![category.id]),
            ..Default::default()
        })
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, published.id);

    Ok(())
}

/// Tests the event date window.
///
/// Expected: Ok with only the event inside the window
#[tokio::test]
async fn filters_by_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let now = Utc::now().naive_utc();

    let soon = EventFactory::new(db, user.id, category.id)
        .event_date(now + Duration::days(1))
        .build()
        .await?;
    EventFactory::new(db, user.id, category.id)
        .event_date(now + Duration::days(30))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo
        .search_admin(AdminEventFilter {
            range_start: Some(now),
            range_end: Some(now + Duration::days(7)),
            ..Default::default()
        })
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, soon.id);

    Ok(())
}
