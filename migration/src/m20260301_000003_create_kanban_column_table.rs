use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_kanban_board_table::KanbanBoard;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KanbanColumn::Table)
                    .if_not_exists()
                    .col(string(KanbanColumn::Id).primary_key())
                    .col(string(KanbanColumn::Name))
                    .col(string(KanbanColumn::BoardId))
                    .col(boolean(KanbanColumn::DisableAdd).default(false))
                    .col(integer(KanbanColumn::Order).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kanban_column_board_id")
                            .from(KanbanColumn::Table, KanbanColumn::BoardId)
                            .to(KanbanBoard::Table, KanbanBoard::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kanban_columns_board_id_order")
                    .table(KanbanColumn::Table)
                    .col(KanbanColumn::BoardId)
                    .col(KanbanColumn::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KanbanColumn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KanbanColumn {
    #[sea_orm(iden = "kanban_columns")]
    Table,
    Id,
    Name,
    BoardId,
    DisableAdd,
    Order,
}
