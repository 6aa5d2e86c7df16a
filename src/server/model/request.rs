//! Participation request domain model and status update parameters.

use chrono::NaiveDateTime;
use entity::participation_request::RequestStatus;

use crate::model::request::{
    EventRequestStatusUpdateRequest, EventRequestStatusUpdateResult, ParticipationRequestDto,
    RequestStatusDto, RequestStatusUpdateDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipationRequest {
    pub id: i32,
    pub requester_id: i32,
    pub event_id: i32,
    pub created: NaiveDateTime,
    pub status: RequestStatus,
}

impl ParticipationRequest {
    pub fn from_entity(entity: entity::participation_request::Model) -> Self {
        Self {
            id: entity.id,
            requester_id: entity.requester_id,
            event_id: entity.event_id,
            created: entity.created,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> ParticipationRequestDto {
        ParticipationRequestDto {
            id: self.id,
            requester: self.requester_id,
            event: self.event_id,
            created: self.created,
            status: status_into_dto(self.status),
        }
    }
}

pub fn status_into_dto(status: RequestStatus) -> RequestStatusDto {
    match status {
        RequestStatus::Pending => RequestStatusDto::Pending,
        RequestStatus::Confirmed => RequestStatusDto::Confirmed,
        RequestStatus::Rejected => RequestStatusDto::Rejected,
        RequestStatus::Canceled => RequestStatusDto::Canceled,
    }
}

/// Initiator's decision on a batch of pending requests for one of their events.
#[derive(Debug, Clone)]
pub struct RequestStatusUpdateParams {
    pub user_id: i32,
    pub event_id: i32,
    pub request_ids: Vec<i32>,
    /// Either `Confirmed` or `Rejected`.
    pub status: RequestStatus,
}

impl RequestStatusUpdateParams {
    pub fn from_dto(user_id: i32, event_id: i32, dto: EventRequestStatusUpdateRequest) -> Self {
        Self {
            user_id,
            event_id,
            request_ids: dto.request_ids,
            status: match dto.status {
                RequestStatusUpdateDto::Confirmed => RequestStatus::Confirmed,
                RequestStatusUpdateDto::Rejected => RequestStatus::Rejected,
            },
        }
    }
}

/// Requests changed by a status update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestStatusUpdateResult {
    pub confirmed: Vec<ParticipationRequest>,
    pub rejected: Vec<ParticipationRequest>,
}

impl RequestStatusUpdateResult {
    pub fn into_dto(self) -> EventRequestStatusUpdateResult {
        EventRequestStatusUpdateResult {
            confirmed_requests: self.confirmed.into_iter().map(|r| r.into_dto()).collect(),
            rejected_requests: self.rejected.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}
