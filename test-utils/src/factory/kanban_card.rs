//! Card factory for creating test kanban cards.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards with customizable fields.
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    column_id: String,
    title: String,
    priority: String,
    status: String,
    likes: i32,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Card {n}"`
    /// - priority: `"MEDIUM"`, status: `"TO_DO"`
    /// - likes: `0`
    pub fn new(db: &'a DatabaseConnection, column_id: impl Into<String>) -> Self {
        Self {
            db,
            column_id: column_id.into(),
            title: format!("Card {}", next_id()),
            priority: "MEDIUM".to_string(),
            status: "TO_DO".to_string(),
            likes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.likes = likes;
        self
    }

    /// Builds and inserts the card entity into the database.
    pub async fn build(self) -> Result<entity::kanban_card::Model, DbErr> {
        entity::kanban_card::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            kanban_column_id: ActiveValue::Set(self.column_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            category_title: ActiveValue::Set(String::new()),
            category_color: ActiveValue::Set("#000000".to_string()),
            priority: ActiveValue::Set(self.priority),
            status: ActiveValue::Set(self.status),
            likes: ActiveValue::Set(self.likes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values in the specified column.
pub async fn create_card(
    db: &DatabaseConnection,
    column_id: impl Into<String>,
) -> Result<entity::kanban_card::Model, DbErr> {
    CardFactory::new(db, column_id).build().await
}
