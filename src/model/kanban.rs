use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardPriority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl CardPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "URGENT",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl FromStr for CardPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "URGENT" => Ok(Self::Urgent),
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            other => Err(format!("Unknown card priority '{}'", other)),
        }
    }
}

impl fmt::Display for CardPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    #[default]
    ToDo,
    Done,
    Review,
    Process,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "TO_DO",
            Self::Done => "DONE",
            Self::Review => "REVIEW",
            Self::Process => "PROCESS",
        }
    }
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TO_DO" => Ok(Self::ToDo),
            "DONE" => Ok(Self::Done),
            "REVIEW" => Ok(Self::Review),
            "PROCESS" => Ok(Self::Process),
            other => Err(format!("Unknown card status '{}'", other)),
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---- Assembled read views ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardSummaryDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub id: String,
    pub name: String,
    pub kanban_columns: Vec<ColumnDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub id: String,
    pub name: String,
    pub disable_add: bool,
    pub order: i32,
    pub items: Vec<CardItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardItemDto {
    pub id: String,
    pub content: CardContentDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardContentDto {
    pub title: String,
    pub description: String,
    pub category: CategoryDto,
    pub priority: CardPriority,
    pub status: CardStatus,
    pub likes: i32,
    pub comments: CardCommentsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub icon: String,
    pub label: String,
    pub color: String,
}

/// Comment section of a card: a top-level comment count on the board list, the full
/// thread on the single-board view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CardCommentsDto {
    Count(u64),
    Thread(Vec<CommentDto>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: String,
    pub text: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub avatar: String,
    pub replies: Vec<ReplyDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReplyDto {
    pub id: String,
    pub text: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub avatar: String,
}

// ---- Stored rows returned by mutations ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumnDto {
    pub id: String,
    pub name: String,
    pub board_id: String,
    pub disable_add: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCardDto {
    pub id: String,
    pub kanban_column_id: String,
    pub title: String,
    pub description: String,
    pub category_title: String,
    pub category_color: String,
    pub priority: CardPriority,
    pub status: CardStatus,
    pub likes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCommentDto {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub kanban_card_id: String,
    pub reply_for_comment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored reply enriched with its display author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDetailDto {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub kanban_card_id: String,
    pub reply_for_comment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub avatar: String,
}

// ---- Requests ----

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardListQuery {
    /// 1-based page number (default: 1)
    pub page: Option<u64>,
    /// Items per page; absent or 0 disables pagination
    pub limit: Option<u64>,
    /// Case-insensitive board name filter
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default: 1)
    pub page: Option<u64>,
    /// Items per page; absent or 0 disables pagination
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LikeCardQuery {
    /// `false` removes a like instead of adding one (default: true)
    pub increment: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBoardDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBoardDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateColumnDto {
    pub board_id: Option<String>,
    pub name: Option<String>,
    pub disable_add: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateColumnDto {
    pub name: Option<String>,
    pub disable_add: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCardDto {
    pub column_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_title: Option<String>,
    pub category_color: Option<String>,
    pub priority: Option<CardPriority>,
    pub status: Option<CardStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCardDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_title: Option<String>,
    pub category_color: Option<String>,
    pub priority: Option<CardPriority>,
    pub status: Option<CardStatus>,
    pub likes: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveCardDto {
    pub card_id: Option<String>,
    #[serde(alias = "targetColumnId")]
    pub new_column_id: Option<String>,
    /// Accepted for client compatibility; card order within a column is by title.
    pub new_index: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCommentDto {
    #[serde(alias = "kanbanCardId")]
    pub card_id: Option<String>,
    pub text: Option<String>,
    pub user_id: Option<String>,
    pub reply_for_comment_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateReplyDto {
    #[serde(alias = "cardId")]
    pub kanban_card_id: Option<String>,
    #[serde(alias = "replyForKanbanCommentId")]
    pub reply_for_comment_id: Option<String>,
    pub text: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCommentDto {
    pub text: Option<String>,
}
