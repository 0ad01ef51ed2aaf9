//! Comment factory for creating test comments and replies.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Each comment gets a creation time offset by the global factory counter so comments
/// created one after another sort in creation order.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    card_id: String,
    user_id: String,
    text: String,
    reply_for_comment_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Comment {n}"`
    /// - reply_for_comment_id: `None`
    pub fn new(
        db: &'a DatabaseConnection,
        card_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let n = next_id();
        Self {
            db,
            card_id: card_id.into(),
            user_id: user_id.into(),
            text: format!("Comment {}", n),
            reply_for_comment_id: None,
            created_at: Utc::now() + Duration::milliseconds(n as i64),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn reply_for(mut self, comment_id: impl Into<String>) -> Self {
        self.reply_for_comment_id = Some(comment_id.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::kanban_comment::Model, DbErr> {
        entity::kanban_comment::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            kanban_card_id: ActiveValue::Set(self.card_id),
            user_id: ActiveValue::Set(self.user_id),
            text: ActiveValue::Set(self.text),
            reply_for_comment_id: ActiveValue::Set(self.reply_for_comment_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment on a card.
pub async fn create_comment(
    db: &DatabaseConnection,
    card_id: impl Into<String>,
    user_id: impl Into<String>,
) -> Result<entity::kanban_comment::Model, DbErr> {
    CommentFactory::new(db, card_id, user_id).build().await
}

/// Creates a reply to `parent` on the parent's card.
pub async fn create_reply(
    db: &DatabaseConnection,
    parent: &entity::kanban_comment::Model,
    user_id: impl Into<String>,
) -> Result<entity::kanban_comment::Model, DbErr> {
    CommentFactory::new(db, parent.kanban_card_id.clone(), user_id)
        .reply_for(parent.id.clone())
        .build()
        .await
}
