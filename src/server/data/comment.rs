use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::comment::{Comment, NewComment};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment or reply stamped with the current time
    pub async fn create(&self, comment: NewComment) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let comment = entity::kanban_comment::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            kanban_card_id: ActiveValue::Set(comment.card_id),
            user_id: ActiveValue::Set(comment.user_id),
            text: ActiveValue::Set(comment.text),
            reply_for_comment_id: ActiveValue::Set(comment.reply_for_comment_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(comment))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, DbErr> {
        let comment = entity::prelude::KanbanComment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(comment.map(Comment::from_entity))
    }

    /// Gets the comments of many cards in one query, grouped by card id.
    ///
    /// Each card's comments are ordered by creation time, ties broken by id. Cards
    /// without comments have no entry in the map.
    pub async fn get_by_card_ids(
        &self,
        card_ids: &[String],
    ) -> Result<HashMap<String, Vec<Comment>>, DbErr> {
        if card_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let comments = entity::prelude::KanbanComment::find()
            .filter(entity::kanban_comment::Column::KanbanCardId.is_in(card_ids.to_vec()))
            .order_by_asc(entity::kanban_comment::Column::CreatedAt)
            .order_by_asc(entity::kanban_comment::Column::Id)
            .all(self.db)
            .await?;

        let mut by_card: HashMap<String, Vec<Comment>> = HashMap::new();
        for comment in comments.into_iter().map(Comment::from_entity) {
            by_card
                .entry(comment.card_id.clone())
                .or_default()
                .push(comment);
        }

        Ok(by_card)
    }

    /// Gets the direct replies to a comment, oldest first
    pub async fn get_replies(&self, comment_id: &str) -> Result<Vec<Comment>, DbErr> {
        let replies = entity::prelude::KanbanComment::find()
            .filter(entity::kanban_comment::Column::ReplyForCommentId.eq(comment_id))
            .order_by_asc(entity::kanban_comment::Column::CreatedAt)
            .order_by_asc(entity::kanban_comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(replies.into_iter().map(Comment::from_entity).collect())
    }

    /// Replaces a comment's text and bumps `updated_at`
    pub async fn update_text(&self, id: &str, text: String) -> Result<Option<Comment>, DbErr> {
        let Some(comment) = entity::prelude::KanbanComment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::kanban_comment::ActiveModel = comment.into();
        active_model.text = ActiveValue::Set(text);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let comment = active_model.update(self.db).await?;

        Ok(Some(Comment::from_entity(comment)))
    }

    /// Deletes a comment and its direct replies in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment existed and was deleted
    /// - `Ok(false)` - No comment with this id
    pub async fn delete_with_replies(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::KanbanComment::delete_many()
            .filter(entity::kanban_comment::Column::ReplyForCommentId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::KanbanComment::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
