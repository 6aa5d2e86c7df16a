//! Participation requests and their moderation by event initiators.
//!
//! Every operation that moves the confirmed participant counter runs inside a single
//! transaction, so the counter always equals the number of confirmed requests.

use entity::{event::EventState, participation_request::RequestStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::server::{
    data::{event::EventRepository, request::RequestRepository},
    error::AppError,
    model::{
        event::limit_reached,
        request::{ParticipationRequest, RequestStatusUpdateParams, RequestStatusUpdateResult},
    },
    service::{event::event_not_found, user::require_user},
    util::time,
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request from `user_id` to join `event_id`.
    ///
    /// The request is confirmed immediately when the event does not moderate requests or
    /// has no participant limit, otherwise it stays pending.
    ///
    /// # Returns
    /// - `Ok(ParticipationRequest)` - Stored request
    /// - `Err(AppError::NotFound)` - Unknown user or event
    /// - `Err(AppError::Conflict)` - Repeat request, own event, unpublished event or
    ///   participant limit reached
    pub async fn create(&self, user_id: i32, event_id: i32) -> Result<ParticipationRequest, AppError> {
        debug!(user_id, event_id, "creating participation request");
        let txn = self.db.begin().await?;

        require_user(&txn, user_id).await?;

        let event_repo = EventRepository::new(&txn);
        let request_repo = RequestRepository::new(&txn);

        let event = event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;

        if request_repo
            .find_by_requester_and_event(user_id, event_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "User with id={} has already requested to join event with id={}",
                user_id, event_id
            )));
        }
        if event.initiator_id == user_id {
            return Err(AppError::Conflict(
                "The initiator cannot request to join their own event".to_string(),
            ));
        }
        if event.state != EventState::Published {
            return Err(AppError::Conflict(
                "Cannot participate in an unpublished event".to_string(),
            ));
        }
        if limit_reached(event.participant_limit, event.confirmed_requests) {
            return Err(AppError::Conflict(
                "The participant limit has been reached".to_string(),
            ));
        }

        let status = if !event.request_moderation || event.participant_limit == 0 {
            RequestStatus::Confirmed
        } else {
            RequestStatus::Pending
        };

        let request = request_repo
            .create(user_id, event_id, status, time::now())
            .await?;

        if status == RequestStatus::Confirmed {
            event_repo
                .set_confirmed_requests(event_id, event.confirmed_requests + 1)
                .await?;
        }

        txn.commit().await?;
        info!(request_id = request.id, status = ?status, "participation request created");

        Ok(request)
    }

    /// Lists every request the user made.
    pub async fn get_by_requester(&self, user_id: i32) -> Result<Vec<ParticipationRequest>, AppError> {
        require_user(self.db, user_id).await?;

        Ok(RequestRepository::new(self.db)
            .get_by_requester(user_id)
            .await?)
    }

    /// Withdraws one of the user's own requests.
    ///
    /// A confirmed request releases its place on the event.
    pub async fn cancel(&self, user_id: i32, request_id: i32) -> Result<ParticipationRequest, AppError> {
        debug!(user_id, request_id, "cancelling participation request");
        let txn = self.db.begin().await?;

        require_user(&txn, user_id).await?;

        let request_repo = RequestRepository::new(&txn);
        let mut request = request_repo
            .get_by_id(request_id)
            .await?
            .filter(|r| r.requester_id == user_id)
            .ok_or_else(|| request_not_found(request_id))?;

        if request.status == RequestStatus::Confirmed {
            let event_repo = EventRepository::new(&txn);
            if let Some(event) = event_repo.find_by_id(request.event_id).await? {
                event_repo
                    .set_confirmed_requests(event.id, (event.confirmed_requests - 1).max(0))
                    .await?;
            }
        }

        request_repo
            .set_status(vec![request.id], RequestStatus::Canceled)
            .await?;
        request.status = RequestStatus::Canceled;

        txn.commit().await?;
        info!(request_id, "participation request cancelled");

        Ok(request)
    }

    /// Lists the requests filed for an event the user initiated.
    pub async fn get_by_event_for_initiator(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Vec<ParticipationRequest>, AppError> {
        require_user(self.db, user_id).await?;

        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .filter(|e| e.initiator_id == user_id)
            .ok_or_else(|| event_not_found(event_id))?;

        Ok(RequestRepository::new(self.db)
            .get_by_event(event.id)
            .await?)
    }

    /// Confirms or rejects pending requests of an event.
    ///
    /// Confirmation walks the listed requests in id order while places remain; the rest of
    /// the list is rejected. Once the event is full every other pending request is rejected
    /// as well.
    ///
    /// # Returns
    /// - `Ok(RequestStatusUpdateResult)` - Requests changed by this call
    /// - `Err(AppError::NotFound)` - Unknown user, event or request, or a request of
    ///   another event
    /// - `Err(AppError::Conflict)` - The user did not initiate the event, a request is not
    ///   pending, or the event is already full when confirming
    pub async fn update_statuses(
        &self,
        params: RequestStatusUpdateParams,
    ) -> Result<RequestStatusUpdateResult, AppError> {
        debug!(
            user_id = params.user_id,
            event_id = params.event_id,
            status = ?params.status,
            "updating participation request statuses"
        );
        let txn = self.db.begin().await?;

        require_user(&txn, params.user_id).await?;

        let event_repo = EventRepository::new(&txn);
        let request_repo = RequestRepository::new(&txn);

        let event = event_repo
            .find_by_id(params.event_id)
            .await?
            .ok_or_else(|| event_not_found(params.event_id))?;

        if event.initiator_id != params.user_id {
            return Err(AppError::Conflict(format!(
                "User with id={} is not the initiator of event with id={}",
                params.user_id, params.event_id
            )));
        }

        let ids: BTreeSet<i32> = params.request_ids.iter().copied().collect();
        let requests = request_repo.get_by_ids(ids.iter().copied().collect()).await?;

        if let Some(missing) = ids
            .iter()
            .find(|id| !requests.iter().any(|r| r.id == **id))
        {
            return Err(request_not_found(*missing));
        }
        if let Some(foreign) = requests.iter().find(|r| r.event_id != event.id) {
            return Err(request_not_found(foreign.id));
        }
        if let Some(settled) = requests
            .iter()
            .find(|r| r.status != RequestStatus::Pending)
        {
            return Err(AppError::Conflict(format!(
                "Request with id={} must have status PENDING",
                settled.id
            )));
        }

        let mut result = RequestStatusUpdateResult::default();
        let mut confirmed_count = event.confirmed_requests;

        if params.status == RequestStatus::Confirmed {
            if limit_reached(event.participant_limit, confirmed_count) {
                return Err(AppError::Conflict(
                    "The participant limit has been reached".to_string(),
                ));
            }

            for mut request in requests {
                if limit_reached(event.participant_limit, confirmed_count) {
                    request.status = RequestStatus::Rejected;
                    result.rejected.push(request);
                } else {
                    confirmed_count += 1;
                    request.status = RequestStatus::Confirmed;
                    result.confirmed.push(request);
                }
            }

            if limit_reached(event.participant_limit, confirmed_count) {
                let remaining = request_repo.get_pending_by_event(event.id).await?;
                for mut request in remaining.into_iter().filter(|r| !ids.contains(&r.id)) {
                    request.status = RequestStatus::Rejected;
                    result.rejected.push(request);
                }
            }
        } else {
            for mut request in requests {
                request.status = RequestStatus::Rejected;
                result.rejected.push(request);
            }
        }

        request_repo
            .set_status(
                result.confirmed.iter().map(|r| r.id).collect(),
                RequestStatus::Confirmed,
            )
            .await?;
        request_repo
            .set_status(
                result.rejected.iter().map(|r| r.id).collect(),
                RequestStatus::Rejected,
            )
            .await?;

        if confirmed_count != event.confirmed_requests {
            event_repo
                .set_confirmed_requests(event.id, confirmed_count)
                .await?;
        }

        txn.commit().await?;
        info!(
            event_id = event.id,
            confirmed = result.confirmed.len(),
            rejected = result.rejected.len(),
            "participation request statuses updated"
        );

        Ok(result)
    }
}

fn request_not_found(request_id: i32) -> AppError {
    AppError::NotFound(format!("Request with id={} was not found", request_id))
}
