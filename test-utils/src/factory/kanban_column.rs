//! Column factory for creating test kanban columns.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test columns with customizable fields.
pub struct ColumnFactory<'a> {
    db: &'a DatabaseConnection,
    board_id: String,
    name: String,
    disable_add: bool,
    order: i32,
}

impl<'a> ColumnFactory<'a> {
    /// Creates a new ColumnFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Column {n}"`
    /// - disable_add: `false`
    /// - order: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `board_id` - Board this column belongs to
    pub fn new(db: &'a DatabaseConnection, board_id: impl Into<String>) -> Self {
        Self {
            db,
            board_id: board_id.into(),
            name: format!("Column {}", next_id()),
            disable_add: false,
            order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn disable_add(mut self, disable_add: bool) -> Self {
        self.disable_add = disable_add;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Builds and inserts the column entity into the database.
    pub async fn build(self) -> Result<entity::kanban_column::Model, DbErr> {
        entity::kanban_column::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(self.name),
            board_id: ActiveValue::Set(self.board_id),
            disable_add: ActiveValue::Set(self.disable_add),
            order: ActiveValue::Set(self.order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a column with default values for the specified board.
pub async fn create_column(
    db: &DatabaseConnection,
    board_id: impl Into<String>,
) -> Result<entity::kanban_column::Model, DbErr> {
    ColumnFactory::new(db, board_id).build().await
}
