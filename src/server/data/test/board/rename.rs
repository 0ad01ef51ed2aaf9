use super::*;

/// Tests renaming an existing board.
///
/// Expected: Ok(Some) with the new name persisted
#[tokio::test]
async fn renames_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;

    let repo = BoardRepository::new(db);
    let renamed = repo.rename(&board.id, "Renamed".to_string()).await?;

    assert_eq!(renamed.unwrap().name, "Renamed");
    assert_eq!(repo.find_by_id(&board.id).await?.unwrap().name, "Renamed");

    Ok(())
}

/// Tests renaming a board that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let result = repo.rename("missing", "Renamed".to_string()).await?;

    assert!(result.is_none());

    Ok(())
}
