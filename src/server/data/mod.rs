//! Database repository layer for the kanban aggregate.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and handles the CRUD operations
//! for one table. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. Cascading deletes run
//! inside a transaction so a board, column, card, or comment disappears together with
//! everything it owns or not at all.

pub mod board;
pub mod card;
pub mod column;
pub mod comment;
pub mod user;

#[cfg(test)]
mod test;
