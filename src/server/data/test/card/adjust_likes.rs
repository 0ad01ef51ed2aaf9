use super::*;

/// Tests that liking increments the stored count.
///
/// Expected: Ok(Some) with likes incremented once per call
#[tokio::test]
async fn increments_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let repo = CardRepository::new(db);
    repo.adjust_likes(&card.id, true).await?;
    let liked = repo.adjust_likes(&card.id, true).await?.unwrap();

    assert_eq!(liked.likes, 2);

    Ok(())
}

/// Tests that unliking decrements but never goes below zero.
///
/// Expected: Ok(Some) with likes 0 after more unlikes than likes
#[tokio::test]
async fn decrement_stops_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;
    let card = factory::kanban_card::CardFactory::new(db, &column.id)
        .likes(1)
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let once = repo.adjust_likes(&card.id, false).await?.unwrap();
    assert_eq!(once.likes, 0);

    let twice = repo.adjust_likes(&card.id, false).await?.unwrap();
    assert_eq!(twice.likes, 0);

    Ok(())
}

/// Tests that concurrent likes are all counted.
///
/// Expected: Ok with likes equal to the number of like calls
#[tokio::test]
async fn concurrent_likes_are_not_lost() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let repo = CardRepository::new(db);
    let (a, b, c) = tokio::join!(
        repo.adjust_likes(&card.id, true),
        repo.adjust_likes(&card.id, true),
        repo.adjust_likes(&card.id, true),
    );
    a?;
    b?;
    c?;

    let stored = repo.find_by_id(&card.id).await?.unwrap();
    assert_eq!(stored.likes, 3);

    Ok(())
}

/// Tests liking a card that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);

    assert!(repo.adjust_likes("missing", true).await?.is_none());

    Ok(())
}
