use super::*;

/// Tests replacing the text of a comment.
///
/// Expected: Ok(Some) with new text and a later updated_at
#[tokio::test]
async fn updates_text_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let comment = factory::kanban_comment::CommentFactory::new(db, &card.id, &user.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_text(&comment.id, "Edited".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.text, "Edited");
    assert_eq!(updated.created_at, comment.created_at);
    assert!(updated.updated_at > comment.updated_at);

    Ok(())
}

/// Tests updating a comment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(repo
        .update_text("missing", "Edited".to_string())
        .await?
        .is_none());

    Ok(())
}
