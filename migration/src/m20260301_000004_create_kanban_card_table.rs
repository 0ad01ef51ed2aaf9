use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_kanban_column_table::KanbanColumn;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KanbanCard::Table)
                    .if_not_exists()
                    .col(string(KanbanCard::Id).primary_key())
                    .col(string(KanbanCard::KanbanColumnId))
                    .col(string(KanbanCard::Title))
                    .col(text(KanbanCard::Description))
                    .col(string(KanbanCard::CategoryTitle))
                    .col(string(KanbanCard::CategoryColor))
                    .col(string(KanbanCard::Priority).default("MEDIUM"))
                    .col(string(KanbanCard::Status).default("TO_DO"))
                    .col(integer(KanbanCard::Likes).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kanban_card_column_id")
                            .from(KanbanCard::Table, KanbanCard::KanbanColumnId)
                            .to(KanbanColumn::Table, KanbanColumn::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kanban_cards_column_id_title")
                    .table(KanbanCard::Table)
                    .col(KanbanCard::KanbanColumnId)
                    .col(KanbanCard::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KanbanCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KanbanCard {
    #[sea_orm(iden = "kanban_cards")]
    Table,
    Id,
    KanbanColumnId,
    Title,
    Description,
    CategoryTitle,
    CategoryColor,
    Priority,
    Status,
    Likes,
}
