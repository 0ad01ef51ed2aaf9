use super::*;

/// Tests counting cards across several columns.
///
/// Expected: Ok with the number of cards in the listed columns only
#[tokio::test]
async fn counts_cards_in_listed_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let first = factory::create_column(db, &board.id).await?;
    let second = factory::create_column(db, &board.id).await?;
    let unlisted = factory::create_column(db, &board.id).await?;
    factory::create_card(db, &first.id).await?;
    factory::create_card(db, &first.id).await?;
    factory::create_card(db, &second.id).await?;
    factory::create_card(db, &unlisted.id).await?;

    let repo = CardRepository::new(db);
    let count = repo
        .count_by_column_ids(&[first.id.clone(), second.id.clone()])
        .await?;

    assert_eq!(count, 3);
    assert_eq!(repo.count_by_column_ids(&[]).await?, 0);

    Ok(())
}
