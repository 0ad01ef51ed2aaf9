use super::*;

/// Tests that only provided fields change.
///
/// Expected: Ok(Some) with the new order and the original name and disable_add
#[tokio::test]
async fn merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::kanban_column::ColumnFactory::new(db, &board.id)
        .name("Review")
        .disable_add(true)
        .build()
        .await?;

    let repo = ColumnRepository::new(db);
    let updated = repo
        .update(
            &column.id,
            ColumnChanges {
                order: Some(7),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.order, 7);
    assert_eq!(updated.name, "Review");
    assert!(updated.disable_add);

    Ok(())
}

/// Tests that an update without changes returns the stored column.
///
/// Expected: Ok(Some) equal to the stored row
#[tokio::test]
async fn returns_unchanged_column_for_empty_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;

    let repo = ColumnRepository::new(db);
    let updated = repo
        .update(&column.id, ColumnChanges::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, column.name);
    assert_eq!(updated.order, column.order);

    Ok(())
}

/// Tests updating a column that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ColumnRepository::new(db);
    let result = repo
        .update(
            "missing",
            ColumnChanges {
                name: Some("Name".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
