use sea_orm::entity::prelude::*;

/// Lifecycle state of an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EventState {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
    #[sea_orm(string_value = "CANCELED")]
    Canceled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub annotation: String,
    pub category_id: i32,
    pub confirmed_requests: i32,
    pub created_on: DateTime,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub event_date: DateTime,
    pub initiator_id: i32,
    pub location_id: i32,
    pub paid: bool,
    pub participant_limit: i32,
    pub published_on: Option<DateTime>,
    pub request_moderation: bool,
    pub state: EventState,
    pub title: String,
    pub views: i64,
    /// Lowercased `annotation`, matched by the public text search.
    #[sea_orm(column_type = "Text")]
    pub annotation_search: String,
    /// Lowercased `description`, matched by the public text search.
    #[sea_orm(column_type = "Text")]
    pub description_search: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InitiatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Initiator,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Location,
    #[sea_orm(has_many = "super::participation_request::Entity")]
    ParticipationRequest,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::compilation_event::Entity")]
    CompilationEvent,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Initiator.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::participation_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParticipationRequest.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::compilation::Entity> for Entity {
    fn to() -> RelationDef {
        super::compilation_event::Relation::Compilation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::compilation_event::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
