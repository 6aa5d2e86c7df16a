use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "compilation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pinned: bool,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::compilation_event::Entity")]
    CompilationEvent,
}

impl Related<super::compilation_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompilationEvent.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::compilation_event::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::compilation_event::Relation::Compilation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
