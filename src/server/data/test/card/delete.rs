use super::*;

/// Tests that deleting a card removes its comments and replies.
///
/// Expected: Ok(true) and other cards' comments remain
#[tokio::test]
async fn deletes_card_with_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, column, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let root = factory::create_comment(db, &card.id, &user.id).await?;
    factory::create_reply(db, &root, &user.id).await?;

    let other = factory::create_card(db, &column.id).await?;
    factory::create_comment(db, &other.id, &user.id).await?;

    let repo = CardRepository::new(db);
    assert!(repo.delete(&card.id).await?);

    assert!(repo.find_by_id(&card.id).await?.is_none());
    assert_eq!(entity::prelude::KanbanCard::find().count(db).await?, 1);
    assert_eq!(entity::prelude::KanbanComment::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a card that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
