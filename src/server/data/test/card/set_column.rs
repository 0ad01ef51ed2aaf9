use super::*;

/// Tests moving a card to another column.
///
/// Expected: Ok(Some) with the new column id and all other fields unchanged
#[tokio::test]
async fn moves_card_to_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let target = factory::create_column(db, &board.id).await?;

    let repo = CardRepository::new(db);
    let moved = repo
        .set_column(&card.id, target.id.clone())
        .await?
        .unwrap();

    assert_eq!(moved.column_id, target.id);
    assert_eq!(moved.title, card.title);

    Ok(())
}

/// Tests moving a card that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;

    let repo = CardRepository::new(db);
    let result = repo.set_column("missing", column.id).await?;

    assert!(result.is_none());

    Ok(())
}
