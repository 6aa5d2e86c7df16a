use super::*;
use entity::participation_request::RequestStatus;
use test_utils::factory::{self, request::RequestFactory};

use crate::{
    model::request::{EventRequestStatusUpdateRequest, RequestStatusUpdateDto},
    server::controller::request::{
        cancel_request, create_request, update_request_statuses, NewRequestQuery,
    },
};

/// Tests that a user cannot request participation in their own event.
///
/// Expected: 409 Conflict
#[tokio::test]
async fn own_event_conflicts() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (initiator, _, event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;

    let result = create_request(
        state(&test),
        AppPath(initiator.id),
        AppQuery(NewRequestQuery { event_id: event.id }),
    )
    .await;

    assert_eq!(status(result), StatusCode::CONFLICT);

    Ok(())
}

/// Tests requesting participation in a published event of another user.
///
/// Expected: 201 Created, and 409 on the repeated request
#[tokio::test]
async fn create_then_repeat() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    let first = create_request(
        state(&test),
        AppPath(requester.id),
        AppQuery(NewRequestQuery { event_id: event.id }),
    )
    .await;
    let repeated = create_request(
        state(&test),
        AppPath(requester.id),
        AppQuery(NewRequestQuery { event_id: event.id }),
    )
    .await;

    assert_eq!(status(first), StatusCode::CREATED);
    assert_eq!(status(repeated), StatusCode::CONFLICT);

    Ok(())
}

/// Tests cancelling another user's request.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn cancel_foreign_request() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let request = factory::create_request(db, requester.id, event.id).await?;

    let result = cancel_request(state(&test), AppPath((stranger.id, request.id))).await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that only pending requests can change status.
///
/// Expected: 409 Conflict for an already confirmed request
#[tokio::test]
async fn status_update_of_confirmed_request() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (initiator, _, event) =
        factory::helpers::create_published_event_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let request = RequestFactory::new(db, requester.id, event.id)
        .status(RequestStatus::Confirmed)
        .build()
        .await?;

    let result = update_request_statuses(
        state(&test),
        AppPath((initiator.id, event.id)),
        AppJson(EventRequestStatusUpdateRequest {
            request_ids: vec![request.id],
            status: RequestStatusUpdateDto::Rejected,
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::CONFLICT);

    Ok(())
}
