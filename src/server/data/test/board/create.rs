use super::*;

/// Tests creating a new board.
///
/// Verifies that the repository assigns a generated id and persists the name.
///
/// Expected: Ok with board created
#[tokio::test]
async fn creates_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let board = repo.create("Roadmap".to_string()).await?;

    assert_eq!(board.name, "Roadmap");
    assert!(!board.id.is_empty());

    let stored = entity::prelude::KanbanBoard::find_by_id(board.id.clone())
        .one(db)
        .await?;
    assert_eq!(stored.unwrap().name, "Roadmap");

    Ok(())
}

/// Tests that every board gets a distinct id.
///
/// Expected: Ok with two boards with different ids
#[tokio::test]
async fn generates_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let first = repo.create("Same".to_string()).await?;
    let second = repo.create("Same".to_string()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::KanbanBoard::find().count(db).await?, 2);

    Ok(())
}
