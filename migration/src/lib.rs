pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_kanban_board_table;
mod m20260301_000003_create_kanban_column_table;
mod m20260301_000004_create_kanban_card_table;
mod m20260301_000005_create_kanban_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_kanban_board_table::Migration),
            Box::new(m20260301_000003_create_kanban_column_table::Migration),
            Box::new(m20260301_000004_create_kanban_card_table::Migration),
            Box::new(m20260301_000005_create_kanban_comment_table::Migration),
        ]
    }
}
