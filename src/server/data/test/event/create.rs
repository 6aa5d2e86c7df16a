use super::*;

/// Tests inserting a new event.
///
/// Verifies that the event starts pending with zeroed counters and no publication date.
///
/// Expected: Ok with the stored row
#[tokio::test]
async fn creates_pending_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let location = factory::create_location(db).await?;
    let now = Utc::now().naive_utc();

    let repo = EventRepository::new(db);
    let model = repo
        .create(
            CreateEventParams {
                initiator_id: user.id,
                category_id: category.id,
                annotation: "A long enough Annotation TEXT".to_string(),
                description: "A long enough description text".to_string(),
                event_date: now + Duration::days(1),
                location: Location {
                    lat: location.lat,
                    lon: location.lon,
                },
                paid: true,
                participant_limit: 5,
                request_moderation: false,
                title: "Meetup".to_string(),
            },
            location.id,
            now,
        )
        .await?;

    assert_eq!(model.state, EventState::Pending);
    assert_eq!(model.confirmed_requests, 0);
    assert_eq!(model.views, 0);
    assert!(model.published_on.is_none());
    assert!(model.paid);
    assert_eq!(model.participant_limit, 5);
    assert!(!model.request_moderation);
    assert_eq!(model.annotation_search, "a long enough annotation text");

    Ok(())
}

/// Tests inserting an event for a category that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let location = factory::create_location(db).await?;
    let now = Utc::now().naive_utc();

    let repo = EventRepository::new(db);
    let result = repo
        .create(
            CreateEventParams {
                initiator_id: user.id,
                category_id: 999,
                annotation: "A long enough annotation text".to_string(),
                description: "A long enough description text".to_string(),
                event_date: now + Duration::days(1),
                location: Location { lat: 0.0, lon: 0.0 },
                paid: false,
                participant_limit: 0,
                request_moderation: true,
                title: "Meetup".to_string(),
            },
            location.id,
            now,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
