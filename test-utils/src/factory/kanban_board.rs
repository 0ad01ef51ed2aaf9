//! Board factory for creating test kanban boards.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards with customizable fields.
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Board {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Board {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the board entity into the database.
    pub async fn build(self) -> Result<entity::kanban_board::Model, DbErr> {
        entity::kanban_board::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values.
pub async fn create_board(db: &DatabaseConnection) -> Result<entity::kanban_board::Model, DbErr> {
    BoardFactory::new(db).build().await
}

/// Creates a board with the given name.
pub async fn create_board_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::kanban_board::Model, DbErr> {
    BoardFactory::new(db).name(name).build().await
}
