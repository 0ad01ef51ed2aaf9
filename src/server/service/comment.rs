use sea_orm::DatabaseConnection;

use crate::server::{
    data::{card::CardRepository, comment::CommentRepository, user::UserRepository},
    error::AppError,
    model::comment::{
        Comment, CreateCommentParams, CreateReplyParams, NewComment, ReplyDetail,
        UpdateCommentParams,
    },
    service::{required, thread::CommentThreadBuilder},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    threads: CommentThreadBuilder<'a>,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, avatar_base_url: &'a str) -> Self {
        Self {
            db,
            threads: CommentThreadBuilder::new(avatar_base_url),
        }
    }

    /// Adds a top-level comment to a card.
    ///
    /// When `reply_for_comment_id` is provided the comment is created as a reply
    /// instead, following the rules of [`Self::add_reply`].
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::BadRequest)` - Card id, text, or user id missing
    /// - `Err(AppError::NotFound)` - Card does not exist
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        if params
            .reply_for_comment_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
        {
            return self
                .add_reply(CreateReplyParams {
                    card_id: params.card_id,
                    reply_for_comment_id: params.reply_for_comment_id,
                    text: params.text,
                    user_id: params.user_id,
                })
                .await;
        }

        let (Some(card_id), Some(text), Some(user_id)) = (
            required(params.card_id),
            required(params.text),
            required(params.user_id),
        ) else {
            return Err(AppError::BadRequest(
                "cardId, text, and userId are required".to_string(),
            ));
        };

        if CardRepository::new(self.db)
            .find_by_id(&card_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Card not found".to_string()));
        }

        let comment = CommentRepository::new(self.db)
            .create(NewComment {
                card_id,
                user_id,
                text,
                reply_for_comment_id: None,
            })
            .await?;

        tracing::info!("Added comment {} to card {}", comment.id, comment.card_id);

        Ok(comment)
    }

    /// Adds a reply to an existing comment.
    ///
    /// The reply always lands on the parent's card. A caller-supplied card id is
    /// optional but must match the parent's card when present.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored reply
    /// - `Err(AppError::BadRequest)` - Parent id, text, or user id missing, or the
    ///   supplied card id conflicts with the parent's card
    /// - `Err(AppError::NotFound)` - Parent comment, or the supplied card, does not exist
    pub async fn add_reply(&self, params: CreateReplyParams) -> Result<Comment, AppError> {
        let (Some(parent_id), Some(text), Some(user_id)) = (
            required(params.reply_for_comment_id),
            required(params.text),
            required(params.user_id),
        ) else {
            return Err(AppError::BadRequest(
                "replyForCommentId, text, and userId are required".to_string(),
            ));
        };

        let comment_repo = CommentRepository::new(self.db);

        let parent = comment_repo
            .find_by_id(&parent_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parent comment not found".to_string()))?;

        if let Some(card_id) = required(params.card_id) {
            if CardRepository::new(self.db)
                .find_by_id(&card_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Card not found".to_string()));
            }
            if card_id != parent.card_id {
                return Err(AppError::BadRequest(
                    "Reply must be on the same card as its parent comment".to_string(),
                ));
            }
        }

        let reply = comment_repo
            .create(NewComment {
                card_id: parent.card_id,
                user_id,
                text,
                reply_for_comment_id: Some(parent.id),
            })
            .await?;

        tracing::info!("Added reply {} to comment {}", reply.id, parent_id);

        Ok(reply)
    }

    pub async fn update(&self, params: UpdateCommentParams) -> Result<Comment, AppError> {
        let text = required(params.text)
            .ok_or_else(|| AppError::BadRequest("Comment text is required".to_string()))?;

        CommentRepository::new(self.db)
            .update_text(&params.id, text)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Deletes a comment together with its direct replies
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = CommentRepository::new(self.db)
            .delete_with_replies(id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        tracing::info!("Deleted comment {}", id);

        Ok(())
    }

    /// Gets the direct replies to a comment with their display authors.
    ///
    /// # Returns
    /// - `Ok(Vec<ReplyDetail>)` - Replies, oldest first
    /// - `Err(AppError::NotFound)` - The comment does not exist
    pub async fn get_replies(&self, comment_id: &str) -> Result<Vec<ReplyDetail>, AppError> {
        let comment_repo = CommentRepository::new(self.db);

        if comment_repo.find_by_id(comment_id).await?.is_none() {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        let replies = comment_repo.get_replies(comment_id).await?;
        let authors = UserRepository::new(self.db)
            .get_authors(replies.iter().map(|r| r.user_id.clone()))
            .await?;

        Ok(replies
            .into_iter()
            .map(|comment| ReplyDetail {
                author: self.threads.author(&comment.user_id, &authors),
                comment,
            })
            .collect())
    }
}
