use super::*;

/// Tests a partial update.
///
/// Verifies that present fields change and absent ones keep their value.
///
/// Expected: Ok with title and limit replaced
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.clone(),
            UpdateEventParams {
                title: Some("Renamed".to_string()),
                participant_limit: Some(12),
                ..Default::default()
            },
            None,
            None,
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.participant_limit, 12);
    assert_eq!(updated.annotation, event.annotation);
    assert_eq!(updated.state, EventState::Pending);

    Ok(())
}

/// Tests applying a publication transition.
///
/// Expected: Ok with state PUBLISHED and the publication time stored
#[tokio::test]
async fn applies_state_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let now = time::now();

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event,
            UpdateEventParams::default(),
            None,
            Some(StateTransition {
                state: EventState::Published,
                published_on: Some(now),
            }),
        )
        .await?;

    assert_eq!(updated.state, EventState::Published);
    assert_eq!(updated.published_on, Some(now));

    Ok(())
}

/// Tests overwriting the participant and view counters.
///
/// Expected: Ok with both counters stored
#[tokio::test]
async fn sets_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    repo.set_confirmed_requests(event.id, 4).await?;
    repo.set_views(event.id, 9).await?;

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.confirmed_requests, 4);
    assert_eq!(stored.views, 9);

    Ok(())
}

/// Tests that edited text is written to the search columns as well.
///
/// Expected: Ok with lowercased copies of the new annotation and description
#[tokio::test]
async fn refreshes_search_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event,
            UpdateEventParams {
                annotation: Some("Вечер ДЖАЗА на набережной".to_string()),
                description: Some("Live Music And Food Trucks".to_string()),
                ..Default::default()
            },
            None,
            None,
        )
        .await?;

    assert_eq!(updated.annotation_search, "вечер джаза на набережной");
    assert_eq!(updated.description_search, "live music and food trucks");

    Ok(())
}
