//! Comment domain models, thread views, and parameters.
//!
//! Comments form a two-level thread: top-level comments have no
//! `reply_for_comment_id`, replies point at a top-level comment on the same card.

use chrono::{DateTime, Utc};

use crate::model::kanban::{CommentDto, KanbanCommentDto, ReplyDetailDto, ReplyDto};

/// Stored comment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub card_id: String,
    pub user_id: String,
    pub text: String,
    pub reply_for_comment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::kanban_comment::Model) -> Self {
        Self {
            id: entity.id,
            card_id: entity.kanban_card_id,
            user_id: entity.user_id,
            text: entity.text,
            reply_for_comment_id: entity.reply_for_comment_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_reply(&self) -> bool {
        self.reply_for_comment_id.is_some()
    }

    pub fn into_dto(self) -> KanbanCommentDto {
        KanbanCommentDto {
            id: self.id,
            text: self.text,
            user_id: self.user_id,
            kanban_card_id: self.card_id,
            reply_for_comment_id: self.reply_for_comment_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User fields needed to present a comment author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
}

impl CommentAuthor {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            firstname: entity.firstname,
            lastname: entity.lastname,
            username: entity.username,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Resolved display name and avatar URL for a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAuthor {
    pub name: String,
    pub avatar: String,
}

/// Top-level comment with its replies, as presented on the single-board view.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadComment {
    pub id: String,
    pub text: String,
    pub author: DisplayAuthor,
    pub date: DateTime<Utc>,
    pub replies: Vec<ThreadReply>,
}

impl ThreadComment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author: self.author.name,
            date: self.date,
            avatar: self.author.avatar,
            replies: self.replies.into_iter().map(ThreadReply::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreadReply {
    pub id: String,
    pub text: String,
    pub author: DisplayAuthor,
    pub date: DateTime<Utc>,
}

impl ThreadReply {
    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            text: self.text,
            author: self.author.name,
            date: self.date,
            avatar: self.author.avatar,
        }
    }
}

/// Stored reply paired with its display author, returned by the replies listing.
#[derive(Debug, Clone)]
pub struct ReplyDetail {
    pub comment: Comment,
    pub author: DisplayAuthor,
}

impl ReplyDetail {
    pub fn into_dto(self) -> ReplyDetailDto {
        ReplyDetailDto {
            id: self.comment.id,
            text: self.comment.text,
            user_id: self.comment.user_id,
            kanban_card_id: self.comment.card_id,
            reply_for_comment_id: self.comment.reply_for_comment_id,
            created_at: self.comment.created_at,
            author: self.author.name,
            avatar: self.author.avatar,
        }
    }
}

/// Raw input for a comment; a `reply_for_comment_id` turns it into a reply.
#[derive(Debug, Clone, Default)]
pub struct CreateCommentParams {
    pub card_id: Option<String>,
    pub text: Option<String>,
    pub user_id: Option<String>,
    pub reply_for_comment_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateReplyParams {
    /// Optional; when given it must match the parent comment's card.
    pub card_id: Option<String>,
    pub reply_for_comment_id: Option<String>,
    pub text: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCommentParams {
    pub id: String,
    pub text: Option<String>,
}

/// Validated values for a new comment row.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub card_id: String,
    pub user_id: String,
    pub text: String,
    pub reply_for_comment_id: Option<String>,
}
