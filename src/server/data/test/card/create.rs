use super::*;

/// Tests creating a card in a column.
///
/// Verifies that enum fields are stored as their wire names and likes start at zero.
///
/// Expected: Ok with card created
#[tokio::test]
async fn creates_card_with_zero_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let board = factory::create_board(db).await?;
    let column = factory::create_column(db, &board.id).await?;

    let repo = CardRepository::new(db);
    let card = repo
        .create(NewCard {
            column_id: column.id.clone(),
            title: "Write docs".to_string(),
            description: "All of them".to_string(),
            category_title: "Docs".to_string(),
            category_color: "#00ff00".to_string(),
            priority: CardPriority::Urgent,
            status: CardStatus::Review,
        })
        .await?;

    assert_eq!(card.column_id, column.id);
    assert_eq!(card.likes, 0);
    assert_eq!(card.priority, CardPriority::Urgent);

    let stored = entity::prelude::KanbanCard::find_by_id(card.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.priority, "URGENT");
    assert_eq!(stored.status, "REVIEW");

    Ok(())
}
