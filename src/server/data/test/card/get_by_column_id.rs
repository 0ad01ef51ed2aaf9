use super::*;

/// Tests that cards are ordered by title.
///
/// Expected: Ok with cards sorted by title
#[tokio::test]
async fn returns_cards_ordered_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;
    for title in ["Gamma", "Alpha", "Beta"] {
        factory::kanban_card::CardFactory::new(db, &column.id)
            .title(title)
            .build()
            .await?;
    }

    let repo = CardRepository::new(db);
    let cards = repo
        .get_by_column_id(&column.id, &PageRequest::unpaginated())
        .await?;

    let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);

    Ok(())
}

/// Tests that a page request slices the column's cards.
///
/// Expected: Ok with two cards on page 1 and the remaining card on page 2
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;
    for title in ["A", "B", "C"] {
        factory::kanban_card::CardFactory::new(db, &column.id)
            .title(title)
            .build()
            .await?;
    }

    let repo = CardRepository::new(db);

    let first = repo
        .get_by_column_id(&column.id, &PageRequest::new(Some(1), Some(2)).unwrap())
        .await?;
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].title, "A");

    let second = repo
        .get_by_column_id(&column.id, &PageRequest::new(Some(2), Some(2)).unwrap())
        .await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "C");

    Ok(())
}

/// Tests that a missing column yields no cards rather than an error.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_missing_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let cards = repo
        .get_by_column_id("missing", &PageRequest::unpaginated())
        .await?;

    assert!(cards.is_empty());

    Ok(())
}

/// Tests that a stored priority outside the known set is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;
    factory::kanban_card::CardFactory::new(db, &column.id)
        .priority("SOMEDAY")
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let result = repo
        .get_by_column_id(&column.id, &PageRequest::unpaginated())
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
