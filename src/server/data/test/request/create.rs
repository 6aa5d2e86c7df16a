use super::*;

/// Tests filing a participation request.
///
/// Expected: Ok with the request findable by requester and event
#[tokio::test]
async fn creates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let created = time::now();

    let repo = RequestRepository::new(db);
    let request = repo
        .create(requester.id, event.id, RequestStatus::Pending, created)
        .await?;

    assert_eq!(request.requester_id, requester.id);
    assert_eq!(request.event_id, event.id);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.created, created);

    let found = repo
        .find_by_requester_and_event(requester.id, event.id)
        .await?;
    assert_eq!(found.map(|r| r.id), Some(request.id));

    Ok(())
}

/// Tests listing a requester's requests across events.
///
/// Expected: Ok with both requests in id order
#[tokio::test]
async fn lists_requests_by_requester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, first_event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;
    let second_event = factory::create_published_event(db, user.id, category.id).await?;
    let requester = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_request(db, requester.id, first_event.id).await?;
    let second = factory::create_request(db, requester.id, second_event.id).await?;
    factory::create_request(db, other.id, first_event.id).await?;

    let repo = RequestRepository::new(db);
    let requests = repo.get_by_requester(requester.id).await?;

    let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
