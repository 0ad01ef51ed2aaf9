//! SeaORM entity models for the kanban store.

pub mod prelude;

pub mod kanban_board;
pub mod kanban_card;
pub mod kanban_column;
pub mod kanban_comment;
pub mod user;
