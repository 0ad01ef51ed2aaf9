//! Column domain models and parameters.

use crate::{
    model::kanban::{ColumnDto, KanbanColumnDto},
    server::model::card::AssembledCard,
};

/// Stored column row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub board_id: String,
    /// When set, new cards cannot be created in this column.
    pub disable_add: bool,
    pub order: i32,
}

impl Column {
    pub fn from_entity(entity: entity::kanban_column::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            board_id: entity.board_id,
            disable_add: entity.disable_add,
            order: entity.order,
        }
    }

    pub fn into_dto(self) -> KanbanColumnDto {
        KanbanColumnDto {
            id: self.id,
            name: self.name,
            board_id: self.board_id,
            disable_add: self.disable_add,
            order: self.order,
        }
    }
}

/// Column with the (possibly paginated) cards it holds.
#[derive(Debug, Clone)]
pub struct AssembledColumn {
    pub column: Column,
    pub cards: Vec<AssembledCard>,
}

impl AssembledColumn {
    pub fn into_dto(self) -> ColumnDto {
        ColumnDto {
            id: self.column.id,
            name: self.column.name,
            disable_add: self.column.disable_add,
            order: self.column.order,
            items: self.cards.into_iter().map(AssembledCard::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateColumnParams {
    pub board_id: Option<String>,
    pub name: Option<String>,
    pub disable_add: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateColumnParams {
    pub id: String,
    pub name: Option<String>,
    pub disable_add: Option<bool>,
    pub order: Option<i32>,
}

/// Validated values for a new column row.
#[derive(Debug, Clone)]
pub struct NewColumn {
    pub board_id: String,
    pub name: String,
    pub disable_add: bool,
    pub order: i32,
}

/// Validated field changes for an existing column; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ColumnChanges {
    pub name: Option<String>,
    pub disable_add: Option<bool>,
    pub order: Option<i32>,
}

impl ColumnChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.disable_add.is_none() && self.order.is_none()
    }
}
