use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kanban_comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kanban_card_id: String,
    pub user_id: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// Parent comment on the same card, `None` for top-level comments.
    pub reply_for_comment_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kanban_card::Entity",
        from = "Column::KanbanCardId",
        to = "super::kanban_card::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    KanbanCard,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ReplyForCommentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ReplyFor,
}

impl Related<super::kanban_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KanbanCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
