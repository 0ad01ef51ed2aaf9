use super::*;

/// Tests that deleting a column removes its cards and their comments.
///
/// Expected: Ok(true) and no cards or comments left for the column
#[tokio::test]
async fn deletes_column_with_cards_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, board, column, card) =
        factory::helpers::create_card_with_dependencies(db).await?;
    factory::create_card(db, &column.id).await?;
    let root = factory::create_comment(db, &card.id, &user.id).await?;
    factory::create_reply(db, &root, &user.id).await?;

    let sibling = factory::create_column(db, &board.id).await?;
    factory::create_card(db, &sibling.id).await?;

    let repo = ColumnRepository::new(db);
    assert!(repo.delete(&column.id).await?);

    assert!(repo.find_by_id(&column.id).await?.is_none());
    assert!(repo.find_by_id(&sibling.id).await?.is_some());
    assert_eq!(entity::prelude::KanbanCard::find().count(db).await?, 1);
    assert_eq!(entity::prelude::KanbanComment::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a column that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ColumnRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
