use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kanban_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kanban_column_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_title: String,
    pub category_color: String,
    /// One of `URGENT`, `HIGH`, `MEDIUM`, `LOW`.
    pub priority: String,
    /// One of `TO_DO`, `DONE`, `REVIEW`, `PROCESS`.
    pub status: String,
    pub likes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kanban_column::Entity",
        from = "Column::KanbanColumnId",
        to = "super::kanban_column::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    KanbanColumn,
    #[sea_orm(has_many = "super::kanban_comment::Entity")]
    KanbanComment,
}

impl Related<super::kanban_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KanbanColumn.def()
    }
}

impl Related<super::kanban_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KanbanComment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
