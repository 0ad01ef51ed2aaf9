//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across all factories, which also gives comments
/// created in sequence strictly increasing timestamps.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete card hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (for authoring comments)
/// 2. Board
/// 3. Column
/// 4. Card
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, board, column, card))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_card_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::kanban_board::Model,
        entity::kanban_column::Model,
        entity::kanban_card::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let board = crate::factory::kanban_board::create_board(db).await?;
    let column = crate::factory::kanban_column::create_column(db, &board.id).await?;
    let card = crate::factory::kanban_card::create_card(db, &column.id).await?;

    Ok((user, board, column, card))
}
