//! Card domain models and parameters.
//!
//! Priority and status are stored as text and parsed into their enums at the
//! repository boundary; a row holding an unknown value surfaces as `DbErr::Custom`.

use sea_orm::DbErr;

use crate::{
    model::kanban::{
        CardCommentsDto, CardContentDto, CardItemDto, CardPriority, CardStatus, CategoryDto,
        KanbanCardDto,
    },
    server::model::comment::ThreadComment,
};

/// Stored card row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub column_id: String,
    pub title: String,
    pub description: String,
    pub category_title: String,
    pub category_color: String,
    pub priority: CardPriority,
    pub status: CardStatus,
    pub likes: i32,
}

impl Card {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Card)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored priority or status is not a known value
    pub fn from_entity(entity: entity::kanban_card::Model) -> Result<Self, DbErr> {
        let priority = entity
            .priority
            .parse::<CardPriority>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse priority: {}", e)))?;
        let status = entity
            .status
            .parse::<CardStatus>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse status: {}", e)))?;

        Ok(Self {
            id: entity.id,
            column_id: entity.kanban_column_id,
            title: entity.title,
            description: entity.description,
            category_title: entity.category_title,
            category_color: entity.category_color,
            priority,
            status,
            likes: entity.likes,
        })
    }

    pub fn into_dto(self) -> KanbanCardDto {
        KanbanCardDto {
            id: self.id,
            kanban_column_id: self.column_id,
            title: self.title,
            description: self.description,
            category_title: self.category_title,
            category_color: self.category_color,
            priority: self.priority,
            status: self.status,
            likes: self.likes,
        }
    }
}

/// How much of each card's comment section a read view resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDetail {
    /// Only the number of top-level comments.
    Count,
    /// The full two-level thread with display authors.
    Thread,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardComments {
    Count(u64),
    Thread(Vec<ThreadComment>),
}

impl CardComments {
    pub fn into_dto(self) -> CardCommentsDto {
        match self {
            Self::Count(count) => CardCommentsDto::Count(count),
            Self::Thread(thread) => CardCommentsDto::Thread(
                thread.into_iter().map(ThreadComment::into_dto).collect(),
            ),
        }
    }
}

/// Card together with its resolved comment section.
#[derive(Debug, Clone)]
pub struct AssembledCard {
    pub card: Card,
    pub comments: CardComments,
}

impl AssembledCard {
    /// Converts to the `{ id, content }` shape used inside column `items`.
    pub fn into_dto(self) -> CardItemDto {
        let card = self.card;

        CardItemDto {
            id: card.id,
            content: CardContentDto {
                title: card.title,
                description: card.description,
                category: CategoryDto {
                    icon: String::new(),
                    label: card.category_title,
                    color: card.category_color,
                },
                priority: card.priority,
                status: card.status,
                likes: card.likes,
                comments: self.comments.into_dto(),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateCardParams {
    pub column_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_title: Option<String>,
    pub category_color: Option<String>,
    pub priority: Option<CardPriority>,
    pub status: Option<CardStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCardParams {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_title: Option<String>,
    pub category_color: Option<String>,
    pub priority: Option<CardPriority>,
    pub status: Option<CardStatus>,
    pub likes: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct MoveCardParams {
    pub card_id: Option<String>,
    pub target_column_id: Option<String>,
}

/// Validated values for a new card row. New cards always start with zero likes.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub column_id: String,
    pub title: String,
    pub description: String,
    pub category_title: String,
    pub category_color: String,
    pub priority: CardPriority,
    pub status: CardStatus,
}

#[derive(Debug, Clone, Default)]
pub struct CardChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_title: Option<String>,
    pub category_color: Option<String>,
    pub priority: Option<CardPriority>,
    pub status: Option<CardStatus>,
    pub likes: Option<i32>,
}

impl CardChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category_title.is_none()
            && self.category_color.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.likes.is_none()
    }
}
