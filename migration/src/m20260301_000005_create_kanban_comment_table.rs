use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_kanban_card_table::KanbanCard;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KanbanComment::Table)
                    .if_not_exists()
                    .col(string(KanbanComment::Id).primary_key())
                    .col(string(KanbanComment::KanbanCardId))
                    .col(string(KanbanComment::UserId))
                    .col(text(KanbanComment::Text))
                    .col(string_null(KanbanComment::ReplyForCommentId))
                    .col(
                        timestamp_with_time_zone(KanbanComment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(KanbanComment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kanban_comment_card_id")
                            .from(KanbanComment::Table, KanbanComment::KanbanCardId)
                            .to(KanbanCard::Table, KanbanCard::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kanban_comment_reply_for_comment_id")
                            .from(KanbanComment::Table, KanbanComment::ReplyForCommentId)
                            .to(KanbanComment::Table, KanbanComment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kanban_comments_card_id")
                    .table(KanbanComment::Table)
                    .col(KanbanComment::KanbanCardId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KanbanComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KanbanComment {
    #[sea_orm(iden = "kanban_comments")]
    Table,
    Id,
    KanbanCardId,
    UserId,
    Text,
    ReplyForCommentId,
    CreatedAt,
    UpdatedAt,
}
