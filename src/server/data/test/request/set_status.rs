use super::*;

/// Tests changing the status of several requests at once.
///
/// Expected: Ok with only the listed requests changed
#[tokio::test]
async fn sets_status_of_listed_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;

    let first = factory::create_request(db, a.id, event.id).await?;
    let second = factory::create_request(db, b.id, event.id).await?;
    let untouched = factory::create_request(db, c.id, event.id).await?;

    let repo = RequestRepository::new(db);
    repo.set_status(vec![first.id, second.id], RequestStatus::Rejected)
        .await?;

    let requests = repo
        .get_by_ids(vec![first.id, second.id, untouched.id])
        .await?;
    assert_eq!(requests[0].status, RequestStatus::Rejected);
    assert_eq!(requests[1].status, RequestStatus::Rejected);
    assert_eq!(requests[2].status, RequestStatus::Pending);

    Ok(())
}

/// Tests that an empty id list is a no-op.
///
/// Expected: Ok with nothing changed
#[tokio::test]
async fn ignores_empty_id_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let request = factory::create_request(db, requester.id, event.id).await?;

    let repo = RequestRepository::new(db);
    repo.set_status(Vec::new(), RequestStatus::Canceled).await?;

    let stored = repo.get_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Pending);

    Ok(())
}
