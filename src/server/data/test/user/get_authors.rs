use super::*;

/// Tests resolving authors for a mix of known, duplicate, and unknown ids.
///
/// Expected: Ok with one entry per known user
#[tokio::test]
async fn resolves_known_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::user::UserFactory::new(db)
        .firstname("Ada")
        .lastname("Lovelace")
        .build()
        .await?;
    let alan = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let authors = repo
        .get_authors(vec![
            ada.id.clone(),
            ada.id.clone(),
            alan.id.clone(),
            "ghost".to_string(),
        ])
        .await?;

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[&ada.id].display_name(), "Ada Lovelace");
    assert!(!authors.contains_key("ghost"));

    Ok(())
}

/// Tests that no ids skips the query.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_authors(Vec::new()).await?.is_empty());

    Ok(())
}
