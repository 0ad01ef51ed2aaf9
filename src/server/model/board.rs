//! Board domain models and parameters.
//!
//! A board is the root of the aggregate: it owns columns, which own cards, which own
//! comments. [`AssembledBoard`] is the fully hydrated read view produced by the board
//! aggregate service.

use crate::{
    model::kanban::{BoardDto, BoardSummaryDto},
    server::model::{column::AssembledColumn, pagination::Pagination},
};

/// Stored board row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: String,
    pub name: String,
}

impl Board {
    pub fn from_entity(entity: entity::kanban_board::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> BoardSummaryDto {
        BoardSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Board with its columns, cards, and comment sections resolved.
#[derive(Debug, Clone)]
pub struct AssembledBoard {
    pub board: Board,
    pub columns: Vec<AssembledColumn>,
}

impl AssembledBoard {
    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.board.id,
            name: self.board.name,
            kanban_columns: self
                .columns
                .into_iter()
                .map(AssembledColumn::into_dto)
                .collect(),
        }
    }
}

/// Single-board view: the assembled board plus card totals for pagination.
#[derive(Debug, Clone)]
pub struct BoardDetail {
    pub board: AssembledBoard,
    /// Number of cards across every column of the board, ignoring pagination.
    pub total_cards: u64,
    pub pagination: Option<Pagination>,
}

/// Raw input for creating a board; validated by the board service.
#[derive(Debug, Clone, Default)]
pub struct CreateBoardParams {
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateBoardParams {
    pub id: String,
    pub name: Option<String>,
}
