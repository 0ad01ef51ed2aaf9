use super::*;

/// Tests creating a column on a board.
///
/// Expected: Ok with all provided fields persisted
#[tokio::test]
async fn creates_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;

    let repo = ColumnRepository::new(db);
    let column = repo
        .create(NewColumn {
            board_id: board.id.clone(),
            name: "Done".to_string(),
            disable_add: true,
            order: 3,
        })
        .await?;

    assert_eq!(column.board_id, board.id);
    assert_eq!(column.name, "Done");
    assert!(column.disable_add);
    assert_eq!(column.order, 3);

    let stored = repo.find_by_id(&column.id).await?.unwrap();
    assert_eq!(stored, column);

    Ok(())
}

/// Tests that a column cannot reference a missing board.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ColumnRepository::new(db);
    let result = repo
        .create(NewColumn {
            board_id: "missing".to_string(),
            name: "Orphan".to_string(),
            disable_add: false,
            order: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
