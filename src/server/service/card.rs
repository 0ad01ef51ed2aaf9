use sea_orm::DatabaseConnection;

use crate::server::{
    data::{card::CardRepository, column::ColumnRepository},
    error::AppError,
    model::card::{
        Card, CardChanges, CreateCardParams, MoveCardParams, NewCard, UpdateCardParams,
    },
    service::required,
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a card in a column that accepts new cards.
    ///
    /// Optional fields default to empty text, `MEDIUM` priority, and `TO_DO` status.
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card with zero likes
    /// - `Err(AppError::BadRequest)` - Column id or title missing, or the column has
    ///   adding disabled
    /// - `Err(AppError::NotFound)` - Column does not exist
    pub async fn create(&self, params: CreateCardParams) -> Result<Card, AppError> {
        let (Some(column_id), Some(title)) = (required(params.column_id), required(params.title))
        else {
            return Err(AppError::BadRequest(
                "columnId and title are required".to_string(),
            ));
        };

        let column = ColumnRepository::new(self.db)
            .find_by_id(&column_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Column not found".to_string()))?;

        if column.disable_add {
            return Err(AppError::BadRequest(
                "Adding cards is disabled for this column".to_string(),
            ));
        }

        let card = CardRepository::new(self.db)
            .create(NewCard {
                column_id,
                title,
                description: params.description.unwrap_or_default(),
                category_title: params.category_title.unwrap_or_default(),
                category_color: params.category_color.unwrap_or_default(),
                priority: params.priority.unwrap_or_default(),
                status: params.status.unwrap_or_default(),
            })
            .await?;

        tracing::info!("Created card {} in column {}", card.id, card.column_id);

        Ok(card)
    }

    /// Updates the provided fields of a card.
    ///
    /// A provided title must not be blank and provided likes must not be negative.
    pub async fn update(&self, params: UpdateCardParams) -> Result<Card, AppError> {
        if params.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::BadRequest("Card title cannot be empty".to_string()));
        }
        if params.likes.is_some_and(|likes| likes < 0) {
            return Err(AppError::BadRequest("Likes cannot be negative".to_string()));
        }

        CardRepository::new(self.db)
            .update(
                &params.id,
                CardChanges {
                    title: params.title.map(|title| title.trim().to_string()),
                    description: params.description,
                    category_title: params.category_title,
                    category_color: params.category_color,
                    priority: params.priority,
                    status: params.status,
                    likes: params.likes,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
    }

    /// Moves a card to another column, possibly on another board.
    ///
    /// The target column's `disable_add` flag only restricts creation, not moves.
    pub async fn move_card(&self, params: MoveCardParams) -> Result<Card, AppError> {
        let (Some(card_id), Some(target_column_id)) =
            (required(params.card_id), required(params.target_column_id))
        else {
            return Err(AppError::BadRequest(
                "cardId and newColumnId are required".to_string(),
            ));
        };

        let card_repo = CardRepository::new(self.db);

        if card_repo.find_by_id(&card_id).await?.is_none() {
            return Err(AppError::NotFound("Card not found".to_string()));
        }

        if ColumnRepository::new(self.db)
            .find_by_id(&target_column_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Target column not found".to_string()));
        }

        let card = card_repo
            .set_column(&card_id, target_column_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Card not found".to_string()))?;

        tracing::info!("Moved card {} to column {}", card.id, card.column_id);

        Ok(card)
    }

    /// Adds one like, or removes one when `increment` is false.
    ///
    /// Removing never takes the count below zero.
    pub async fn like(&self, id: &str, increment: bool) -> Result<Card, AppError> {
        CardRepository::new(self.db)
            .adjust_likes(id, increment)
            .await?
            .ok_or_else(|| AppError::NotFound("Card not found".to_string()))
    }

    /// Deletes a card and its comments
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = CardRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Card not found".to_string()));
        }

        tracing::info!("Deleted card {}", id);

        Ok(())
    }
}
