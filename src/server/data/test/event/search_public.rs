use super::*;

/// Tests that only published future events are listed by default.
///
/// Expected: Ok with only the published event
#[tokio::test]
async fn lists_only_published_future_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, _pending) = factory::helpers::create_event_with_dependencies(db).await?;
    let published = factory::create_published_event(db, user.id, category.id).await?;
    let now = Utc::now().naive_utc();
    EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .event_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo
        .search_public(PublicEventFilter::default(), now)
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, published.id);

    Ok(())
}

/// Tests the text search over annotation and description.
///
/// Expected: Ok with events matching either field regardless of case
#[tokio::test]
async fn matches_text_in_annotation_or_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let by_annotation = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .annotation("Open air JAZZ evening in the park")
        .build()
        .await?;
    let by_description = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .description("Bring your friends, there will be jazz")
        .build()
        .await?;
    EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .annotation("Chess tournament for beginners")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo
        .search_public(
            PublicEventFilter {
                text: Some("Jazz".to_string()),
                ..Default::default()
            },
            Utc::now().naive_utc(),
        )
        .await?;

    let mut ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    ids.sort();
    assert_eq!(ids, vec![by_annotation.id, by_description.id]);

    Ok(())
}

/// Tests the availability filter.
///
/// Expected: Ok with unlimited and partially filled events, without the full one
#[tokio::test]
async fn only_available_skips_full_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let unlimited = factory::create_published_event(db, user.id, category.id).await?;
    let open = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .participant_limit(3)
        .confirmed_requests(2)
        .build()
        .await?;
    EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .participant_limit(2)
        .confirmed_requests(2)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo
        .search_public(
            PublicEventFilter {
                only_available: true,
                ..Default::default()
            },
            Utc::now().naive_utc(),
        )
        .await?;

    let mut ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    ids.sort();
    assert_eq!(ids, vec![unlimited.id, open.id]);

    Ok(())
}

/// Tests the three sort orders.
///
/// Expected: EVENT_DATE ascending, VIEWS descending, RATINGS by average descending
#[tokio::test]
async fn sorts_by_date_views_and_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let rater = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let now = Utc::now().naive_utc();

    let late = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .event_date(now + Duration::days(10))
        .views(1)
        .build()
        .await?;
    let early = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .event_date(now + Duration::days(2))
        .views(50)
        .build()
        .await?;
    factory::create_rating(db, rater.id, late.id, 5).await?;
    factory::create_rating(db, rater.id, early.id, 1).await?;

    let repo = EventRepository::new(db);
    let sorted = |sort| PublicEventFilter {
        sort: Some(sort),
        pagination: Pagination::default(),
        ..Default::default()
    };

    let by_date = repo.search_public(sorted(EventSort::EventDate), now).await?;
    assert_eq!(by_date[0].id, early.id);

    let by_views = repo.search_public(sorted(EventSort::Views), now).await?;
    assert_eq!(by_views[0].id, early.id);

    let by_rating = repo.search_public(sorted(EventSort::Ratings), now).await?;
    assert_eq!(by_rating[0].id, late.id);

    Ok(())
}

/// Tests that the text search folds case outside ASCII.
///
/// Expected: Ok with the Cyrillic event for lower, upper and mixed case queries
#[tokio::test]
async fn matches_cyrillic_text_in_any_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let concert = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .annotation("Большой концерт в парке у реки")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    for text in ["концерт", "КОНЦЕРТ", "Концерт"] {
        let events = repo
            .search_public(
                PublicEventFilter {
                    text: Some(text.to_string()),
                    ..Default::default()
                },
                Utc::now().naive_utc(),
            )
            .await?;

        assert_eq!(events.len(), 1, "query {}", text);
        assert_eq!(events[0].id, concert.id);
    }

    Ok(())
}

/// Tests that `%` and `_` in the search text match literally.
///
/// Expected: Ok with no events for `%%%` and `_`, and the discount event for `50%`
#[tokio::test]
async fn treats_wildcards_in_text_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .annotation("Open air jazz evening in the park")
        .build()
        .await?;
    let discount = EventFactory::new(db, user.id, category.id)
        .state(EventState::Published)
        .annotation("Museum night with 50% off tickets")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let search = |text: &str| PublicEventFilter {
        text: Some(text.to_string()),
        ..Default::default()
    };
    let now = Utc::now().naive_utc();

    assert!(repo.search_public(search("%%%"), now).await?.is_empty());
    assert!(repo.search_public(search("_"), now).await?.is_empty());

    let events = repo.search_public(search("50%"), now).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, discount.id);

    Ok(())
}
