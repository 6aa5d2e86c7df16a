//! Comment domain model and parameters.

use chrono::NaiveDateTime;

use crate::{
    model::comment::{CommentDto, CommentSortDto, NewCommentDto},
    server::{error::AppError, util::validation},
};

const TEXT_MAX: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub author_id: i32,
    pub event_id: i32,
    pub created: NaiveDateTime,
    pub updated: bool,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            author_id: entity.author_id,
            event_id: entity.event_id,
            created: entity.created,
            updated: entity.updated,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author: self.author_id,
            event: self.event_id,
            updated: self.updated,
            created: self.created,
        }
    }
}

/// Validated comment body, shared by create and edit.
#[derive(Debug, Clone)]
pub struct CommentTextParams {
    pub text: String,
}

impl CommentTextParams {
    pub fn from_dto(dto: NewCommentDto) -> Result<Self, AppError> {
        validation::require_text("text", &dto.text, 1, TEXT_MAX)?;

        Ok(Self { text: dto.text })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSort {
    DateAsc,
    DateDesc,
}

impl From<CommentSortDto> for CommentSort {
    fn from(dto: CommentSortDto) -> Self {
        match dto {
            CommentSortDto::DateAsc => Self::DateAsc,
            CommentSortDto::DateDesc => Self::DateDesc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_must_be_present_and_bounded() {
        let ok = CommentTextParams::from_dto(NewCommentDto {
            text: "Nice".to_string(),
        });
        let blank = CommentTextParams::from_dto(NewCommentDto {
            text: "\n\t".to_string(),
        });
        let long = CommentTextParams::from_dto(NewCommentDto {
            text: "x".repeat(1025),
        });

        assert!(ok.is_ok());
        assert!(blank.is_err());
        assert!(long.is_err());
    }
}
