//! Rating domain model and aggregate.

use crate::{
    model::rating::{EventRatingDto, NewRatingDto, RatingDto},
    server::{error::AppError, util::validation},
};

pub const ASSESSMENT_MIN: i32 = 0;
pub const ASSESSMENT_MAX: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub user_id: i32,
    pub event_id: i32,
    pub assessment: i32,
}

impl Rating {
    pub fn from_entity(entity: entity::rating::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            event_id: entity.event_id,
            assessment: entity.assessment,
        }
    }

    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            user_id: self.user_id,
            event_id: self.event_id,
            assessment: self.assessment,
        }
    }
}

/// Average and number of assessments an event received.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventRating {
    pub average: f64,
    pub count: u64,
}

impl EventRating {
    /// Aggregates raw assessments. An empty slice averages to `0.0`.
    pub fn from_assessments(assessments: &[i32]) -> Self {
        if assessments.is_empty() {
            return Self::default();
        }

        let sum: i64 = assessments.iter().map(|a| *a as i64).sum();
        Self {
            average: sum as f64 / assessments.len() as f64,
            count: assessments.len() as u64,
        }
    }

    pub fn into_dto(self, event_id: i32) -> EventRatingDto {
        EventRatingDto {
            event_id,
            average: self.average,
            count: self.count,
        }
    }
}

/// Validated assessment for a new or edited rating.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentParams {
    pub assessment: i32,
}

impl AssessmentParams {
    pub fn from_dto(dto: NewRatingDto) -> Result<Self, AppError> {
        validation::require_range("assessment", dto.assessment, ASSESSMENT_MIN, ASSESSMENT_MAX)?;

        Ok(Self {
            assessment: dto.assessment,
        })
    }
}
