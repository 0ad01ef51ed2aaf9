use super::*;

/// Tests that only direct replies of the comment are returned, oldest first.
///
/// Expected: Ok with the two replies in creation order
#[tokio::test]
async fn returns_direct_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let root = factory::create_comment(db, &card.id, &user.id).await?;
    let other_root = factory::create_comment(db, &card.id, &user.id).await?;
    let first = factory::create_reply(db, &root, &user.id).await?;
    let second = factory::create_reply(db, &root, &user.id).await?;
    factory::create_reply(db, &other_root, &user.id).await?;

    let repo = CommentRepository::new(db);
    let replies = repo.get_replies(&root.id).await?;

    let ids: Vec<_> = replies.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
