use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kanban_boards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kanban_column::Entity")]
    KanbanColumn,
}

impl Related<super::kanban_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KanbanColumn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
