use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000001_create_user_table::User, m20261019_000002_create_category_table::Category,
    m20261019_000003_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(text(Event::Annotation))
                    .col(integer(Event::CategoryId))
                    .col(integer(Event::ConfirmedRequests).default(0))
                    .col(
                        timestamp(Event::CreatedOn)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(text(Event::Description))
                    .col(timestamp(Event::EventDate))
                    .col(integer(Event::InitiatorId))
                    .col(integer(Event::LocationId))
                    .col(boolean(Event::Paid).default(false))
                    .col(integer(Event::ParticipantLimit).default(0))
                    .col(timestamp_null(Event::PublishedOn))
                    .col(boolean(Event::RequestModeration).default(true))
                    .col(string_len(Event::State, 16))
                    .col(string_len(Event::Title, 120))
                    .col(big_integer(Event::Views).default(0))
                    .col(text(Event::AnnotationSearch))
                    .col(text(Event::DescriptionSearch))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_category_id")
                            .from(Event::Table, Event::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_initiator_id")
                            .from(Event::Table, Event::InitiatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_location_id")
                            .from(Event::Table, Event::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Annotation,
    CategoryId,
    ConfirmedRequests,
    CreatedOn,
    Description,
    EventDate,
    InitiatorId,
    LocationId,
    Paid,
    ParticipantLimit,
    PublishedOn,
    RequestModeration,
    State,
    Title,
    Views,
    AnnotationSearch,
    DescriptionSearch,
}
