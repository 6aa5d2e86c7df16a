use super::*;

/// Tests selecting only pending requests of one event.
///
/// Expected: Ok with the pending request of the event only
#[tokio::test]
async fn returns_only_pending_requests_of_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;
    let other_event = factory::create_published_event(db, user.id, category.id).await?;
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let pending = factory::create_request(db, a.id, event.id).await?;
    RequestFactory::new(db, b.id, event.id)
        .status(RequestStatus::Confirmed)
        .build()
        .await?;
    factory::create_request(db, b.id, other_event.id).await?;

    let repo = RequestRepository::new(db);
    let requests = repo.get_pending_by_event(event.id).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, pending.id);

    let all = repo.get_by_event(event.id).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
