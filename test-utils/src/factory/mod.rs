//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of their parent rows, so a test
//! builds the board → column → card → comment chain explicitly or through `helpers`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let board = factory::create_board(&db).await?;
//!     let column = factory::create_column(&db, &board.id).await?;
//!
//!     // Or everything at once
//!     let (user, board, column, card) = factory::helpers::create_card_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let column = factory::kanban_column::ColumnFactory::new(&db, &board.id)
//!     .name("Done")
//!     .order(3)
//!     .disable_add(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create comment authors
//! - `kanban_board` - Create boards
//! - `kanban_column` - Create columns of a board
//! - `kanban_card` - Create cards of a column
//! - `kanban_comment` - Create comments and replies of a card
//! - `helpers` - Counter and dependency-chain helpers

pub mod helpers;
pub mod kanban_board;
pub mod kanban_card;
pub mod kanban_column;
pub mod kanban_comment;
pub mod user;

pub use kanban_board::create_board;
pub use kanban_card::create_card;
pub use kanban_column::create_column;
pub use kanban_comment::{create_comment, create_reply};
pub use user::create_user;
