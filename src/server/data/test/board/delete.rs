use super::*;

/// Tests that deleting a board removes its whole aggregate.
///
/// Verifies that columns, cards, comments, and replies of the board are deleted
/// while another board's data is untouched.
///
/// Expected: Ok(true) and only the other board's rows remain
#[tokio::test]
async fn deletes_board_with_descendants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, board, column, card) =
        factory::helpers::create_card_with_dependencies(db).await?;
    factory::create_column(db, &board.id).await?;
    let root = factory::create_comment(db, &card.id, &user.id).await?;
    factory::create_reply(db, &root, &user.id).await?;

    let (_, other_board, _, other_card) =
        factory::helpers::create_card_with_dependencies(db).await?;
    factory::create_comment(db, &other_card.id, &user.id).await?;

    let repo = BoardRepository::new(db);
    assert!(repo.delete(&board.id).await?);

    assert!(repo.find_by_id(&board.id).await?.is_none());
    assert!(entity::prelude::KanbanColumn::find_by_id(column.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::KanbanCard::find_by_id(card.id)
        .one(db)
        .await?
        .is_none());

    assert!(repo.find_by_id(&other_board.id).await?.is_some());
    assert_eq!(entity::prelude::KanbanColumn::find().count(db).await?, 1);
    assert_eq!(entity::prelude::KanbanCard::find().count(db).await?, 1);
    assert_eq!(entity::prelude::KanbanComment::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a board that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
