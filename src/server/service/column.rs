use sea_orm::DatabaseConnection;

use crate::server::{
    data::{board::BoardRepository, column::ColumnRepository},
    error::AppError,
    model::column::{Column, ColumnChanges, CreateColumnParams, NewColumn, UpdateColumnParams},
    service::required,
};

pub struct ColumnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ColumnService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a column to a board.
    ///
    /// `disable_add` defaults to `false` and `order` to `0`.
    ///
    /// # Returns
    /// - `Ok(Column)` - The stored column
    /// - `Err(AppError::BadRequest)` - Board id or name missing
    /// - `Err(AppError::NotFound)` - Board does not exist
    pub async fn create(&self, params: CreateColumnParams) -> Result<Column, AppError> {
        let (Some(board_id), Some(name)) = (required(params.board_id), required(params.name))
        else {
            return Err(AppError::BadRequest(
                "boardId and name are required".to_string(),
            ));
        };

        if BoardRepository::new(self.db)
            .find_by_id(&board_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        let column = ColumnRepository::new(self.db)
            .create(NewColumn {
                board_id,
                name,
                disable_add: params.disable_add.unwrap_or(false),
                order: params.order.unwrap_or(0),
            })
            .await?;

        tracing::info!("Added column {} to board {}", column.id, column.board_id);

        Ok(column)
    }

    /// Updates the provided fields of a column; a provided name must not be blank.
    pub async fn update(&self, params: UpdateColumnParams) -> Result<Column, AppError> {
        if params.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Column name cannot be empty".to_string(),
            ));
        }

        ColumnRepository::new(self.db)
            .update(
                &params.id,
                ColumnChanges {
                    name: params.name.map(|name| name.trim().to_string()),
                    disable_add: params.disable_add,
                    order: params.order,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Column not found".to_string()))
    }

    /// Deletes a column with all its cards and their comments
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = ColumnRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Column not found".to_string()));
        }

        tracing::info!("Deleted column {}", id);

        Ok(())
    }
}
