use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KanbanBoard::Table)
                    .if_not_exists()
                    .col(string(KanbanBoard::Id).primary_key())
                    .col(string(KanbanBoard::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kanban_boards_name")
                    .table(KanbanBoard::Table)
                    .col(KanbanBoard::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KanbanBoard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KanbanBoard {
    #[sea_orm(iden = "kanban_boards")]
    Table,
    Id,
    Name,
}
