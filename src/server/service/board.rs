use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::{
        board::{Board, CreateBoardParams, UpdateBoardParams},
        pagination::{Page, PageRequest, Pagination},
    },
    service::required,
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of boards without their contents
    pub async fn get_board_list(&self, page: PageRequest) -> Result<Page<Board>, AppError> {
        let (items, total) = BoardRepository::new(self.db)
            .get_paginated(None, &page)
            .await?;

        Ok(Page {
            items,
            total,
            pagination: Pagination::compute(&page, total),
        })
    }

    pub async fn get_board_by_id(&self, id: &str) -> Result<Board, AppError> {
        BoardRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))
    }

    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let name = required(params.name).ok_or_else(|| {
            AppError::BadRequest("Board name is required".to_string())
        })?;

        let board = BoardRepository::new(self.db).create(name).await?;

        tracing::info!("Created board {} ({})", board.id, board.name);

        Ok(board)
    }

    pub async fn update(&self, params: UpdateBoardParams) -> Result<Board, AppError> {
        let name = required(params.name).ok_or_else(|| {
            AppError::BadRequest("Board name is required".to_string())
        })?;

        BoardRepository::new(self.db)
            .rename(&params.id, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))
    }

    /// Deletes a board with all its columns, cards, and comments
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = BoardRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        tracing::info!("Deleted board {}", id);

        Ok(())
    }
}
