use super::*;

/// Tests that deleting a comment also deletes its replies.
///
/// Expected: Ok(true) and only the unrelated comment remains
#[tokio::test]
async fn deletes_comment_and_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let root = factory::create_comment(db, &card.id, &user.id).await?;
    factory::create_reply(db, &root, &user.id).await?;
    factory::create_reply(db, &root, &user.id).await?;
    let unrelated = factory::create_comment(db, &card.id, &user.id).await?;

    let repo = CommentRepository::new(db);
    assert!(repo.delete_with_replies(&root.id).await?);

    assert_eq!(entity::prelude::KanbanComment::find().count(db).await?, 1);
    assert!(repo.find_by_id(&unrelated.id).await?.is_some());

    Ok(())
}

/// Tests deleting a single reply keeps its parent.
///
/// Expected: Ok(true) and the parent remains
#[tokio::test]
async fn deleting_reply_keeps_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let root = factory::create_comment(db, &card.id, &user.id).await?;
    let reply = factory::create_reply(db, &root, &user.id).await?;

    let repo = CommentRepository::new(db);
    assert!(repo.delete_with_replies(&reply.id).await?);

    assert!(repo.find_by_id(&root.id).await?.is_some());
    assert!(repo.find_by_id(&reply.id).await?.is_none());

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(!repo.delete_with_replies("missing").await?);

    Ok(())
}
