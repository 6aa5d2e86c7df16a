use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000004_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Compilation::Table)
                    .if_not_exists()
                    .col(pk_auto(Compilation::Id))
                    .col(boolean(Compilation::Pinned).default(false))
                    .col(string_len(Compilation::Title, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompilationEvent::Table)
                    .if_not_exists()
                    .col(integer(CompilationEvent::CompilationId))
                    .col(integer(CompilationEvent::EventId))
                    .primary_key(
                        Index::create()
                            .col(CompilationEvent::CompilationId)
                            .col(CompilationEvent::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_compilation_event_compilation_id")
                            .from(CompilationEvent::Table, CompilationEvent::CompilationId)
                            .to(Compilation::Table, Compilation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_compilation_event_event_id")
                            .from(CompilationEvent::Table, CompilationEvent::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompilationEvent::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Compilation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Compilation {
    Table,
    Id,
    Pinned,
    Title,
}

#[derive(DeriveIden)]
pub enum CompilationEvent {
    Table,
    CompilationId,
    EventId,
}
