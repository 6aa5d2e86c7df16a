pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_user_table;
mod m20261019_000002_create_category_table;
mod m20261019_000003_create_location_table;
mod m20261019_000004_create_event_table;
mod m20261019_000005_create_participation_request_table;
mod m20261019_000006_create_compilation_table;
mod m20261019_000007_create_comment_table;
mod m20261019_000008_create_rating_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_user_table::Migration),
            Box::new(m20261019_000002_create_category_table::Migration),
            Box::new(m20261019_000003_create_location_table::Migration),
            Box::new(m20261019_000004_create_event_table::Migration),
            Box::new(m20261019_000005_create_participation_request_table::Migration),
            Box::new(m20261019_000006_create_compilation_table::Migration),
            Box::new(m20261019_000007_create_comment_table::Migration),
            Box::new(m20261019_000008_create_rating_table::Migration),
        ]
    }
}
