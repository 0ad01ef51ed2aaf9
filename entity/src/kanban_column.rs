use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kanban_columns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub board_id: String,
    pub disable_add: bool,
    /// Display position within the board; not unique.
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kanban_board::Entity",
        from = "Column::BoardId",
        to = "super::kanban_board::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    KanbanBoard,
    #[sea_orm(has_many = "super::kanban_card::Entity")]
    KanbanCard,
}

impl Related<super::kanban_board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KanbanBoard.def()
    }
}

impl Related<super::kanban_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KanbanCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
