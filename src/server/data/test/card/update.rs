use super::*;

/// Tests that only provided fields change.
///
/// Expected: Ok(Some) with new status and likes, original title
#[tokio::test]
async fn merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, column, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let repo = CardRepository::new(db);
    let updated = repo
        .update(
            &card.id,
            CardChanges {
                status: Some(CardStatus::Done),
                likes: Some(4),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, CardStatus::Done);
    assert_eq!(updated.likes, 4);
    assert_eq!(updated.title, card.title);
    assert_eq!(updated.column_id, column.id);

    Ok(())
}

/// Tests updating a card that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let result = repo
        .update(
            "missing",
            CardChanges {
                title: Some("Title".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
