//! Read views over whole boards.
//!
//! The board list shows every board fully hydrated with a comment count per card; the
//! single-board view shows one board with full comment threads and paginates the cards
//! of each column.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::{
        board::{AssembledBoard, BoardDetail},
        card::CommentDetail,
        pagination::{Page, PageRequest, Pagination},
    },
    service::assembler::ColumnAssembler,
};

pub struct BoardAggregateService<'a> {
    db: &'a DatabaseConnection,
    columns: ColumnAssembler<'a>,
}

impl<'a> BoardAggregateService<'a> {
    pub fn new(db: &'a DatabaseConnection, avatar_base_url: &'a str) -> Self {
        Self {
            db,
            columns: ColumnAssembler::new(db, avatar_base_url),
        }
    }

    /// Gets a page of boards, each with all its columns and cards.
    ///
    /// Pagination applies to boards; every card of a listed board is included, with
    /// its comment count instead of the thread.
    ///
    /// # Arguments
    /// - `search` - Optional board name substring
    /// - `page` - Requested page of boards
    pub async fn get_all_boards(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<AssembledBoard>, AppError> {
        let (boards, total) = BoardRepository::new(self.db)
            .get_paginated(search, &page)
            .await?;

        let mut items = Vec::with_capacity(boards.len());
        for board in boards {
            let (columns, _) = self
                .columns
                .assemble(&board.id, CommentDetail::Count, &PageRequest::unpaginated())
                .await?;
            items.push(AssembledBoard { board, columns });
        }

        Ok(Page {
            items,
            total,
            pagination: Pagination::compute(&page, total),
        })
    }

    /// Gets one board with full comment threads.
    ///
    /// The page request applies to the cards of each column. Pagination metadata is
    /// computed against the number of cards on the whole board.
    ///
    /// # Returns
    /// - `Ok(BoardDetail)` - The assembled board with card totals
    /// - `Err(AppError::NotFound)` - No board with this id
    pub async fn get_kanban_board_by_id(
        &self,
        id: &str,
        page: PageRequest,
    ) -> Result<BoardDetail, AppError> {
        let board = BoardRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Kanban board not found".to_string()))?;

        let (columns, total_cards) = self
            .columns
            .assemble(&board.id, CommentDetail::Thread, &page)
            .await?;

        tracing::debug!(
            "Assembled board {} with {} columns and {} cards",
            board.id,
            columns.len(),
            total_cards
        );

        Ok(BoardDetail {
            board: AssembledBoard { board, columns },
            total_cards,
            pagination: Pagination::compute(&page, total_cards)
                .map(|pagination| pagination.with_total_cards(total_cards)),
        })
    }
}
