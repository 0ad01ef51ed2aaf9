use super::*;

/// Tests that comments are grouped per card in creation order.
///
/// Expected: Ok with one entry per commented card, oldest comment first
#[tokio::test]
async fn groups_comments_by_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, column, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let other = factory::create_card(db, &column.id).await?;
    let silent = factory::create_card(db, &column.id).await?;

    let now = Utc::now();
    let later = factory::kanban_comment::CommentFactory::new(db, &card.id, &user.id)
        .created_at(now + Duration::seconds(10))
        .build()
        .await?;
    let earlier = factory::kanban_comment::CommentFactory::new(db, &card.id, &user.id)
        .created_at(now)
        .build()
        .await?;
    factory::create_comment(db, &other.id, &user.id).await?;

    let repo = CommentRepository::new(db);
    let by_card = repo
        .get_by_card_ids(&[card.id.clone(), other.id.clone(), silent.id.clone()])
        .await?;

    let card_comments = &by_card[&card.id];
    assert_eq!(card_comments.len(), 2);
    assert_eq!(card_comments[0].id, earlier.id);
    assert_eq!(card_comments[1].id, later.id);
    assert_eq!(by_card[&other.id].len(), 1);
    assert!(!by_card.contains_key(&silent.id));

    Ok(())
}

/// Tests that an empty id list skips the query.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(repo.get_by_card_ids(&[]).await?.is_empty());

    Ok(())
}
