use super::*;

/// Tests that an unpaginated request returns every board ordered by name.
///
/// Expected: Ok with all boards and total equal to their number
#[tokio::test]
async fn returns_all_boards_when_unpaginated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::kanban_board::create_board_named(db, "Charlie").await?;
    factory::kanban_board::create_board_named(db, "Alpha").await?;
    factory::kanban_board::create_board_named(db, "Bravo").await?;

    let repo = BoardRepository::new(db);
    let (boards, total) = repo
        .get_paginated(None, &PageRequest::unpaginated())
        .await?;

    assert_eq!(total, 3);
    let names: Vec<_> = boards.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);

    Ok(())
}

/// Tests that a paginated request returns only the requested slice.
///
/// Verifies that `total` counts every board, not only the returned page.
///
/// Expected: Ok with 2 boards on page 1, 1 board on page 2
#[tokio::test]
async fn paginates_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["A", "B", "C"] {
        factory::kanban_board::create_board_named(db, name).await?;
    }

    let repo = BoardRepository::new(db);

    let (first, total) = repo
        .get_paginated(None, &PageRequest::new(Some(1), Some(2)).unwrap())
        .await?;
    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "A");

    let (second, total) = repo
        .get_paginated(None, &PageRequest::new(Some(2), Some(2)).unwrap())
        .await?;
    assert_eq!(total, 3);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "C");

    let (past_end, _) = repo
        .get_paginated(None, &PageRequest::new(Some(5), Some(2)).unwrap())
        .await?;
    assert!(past_end.is_empty());

    Ok(())
}

/// Tests that the search filter matches name substrings regardless of case.
///
/// Expected: Ok with only matching boards, total counts matches only
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::kanban_board::create_board_named(db, "Marketing Plan").await?;
    factory::kanban_board::create_board_named(db, "Sprint planning").await?;
    factory::kanban_board::create_board_named(db, "Bugs").await?;

    let repo = BoardRepository::new(db);
    let (boards, total) = repo
        .get_paginated(Some("PLAN"), &PageRequest::unpaginated())
        .await?;

    assert_eq!(total, 2);
    assert!(boards.iter().all(|b| b.name.to_lowercase().contains("plan")));

    Ok(())
}

/// Tests that an empty search string does not filter.
///
/// Expected: Ok with every board
#[tokio::test]
async fn ignores_empty_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_board(db).await?;
    factory::create_board(db).await?;

    let repo = BoardRepository::new(db);
    let (_, total) = repo
        .get_paginated(Some(""), &PageRequest::unpaginated())
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests that a whitespace-only search is treated like no search.
///
/// Expected: Ok with every board
#[tokio::test]
async fn ignores_blank_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::kanban_board::create_board_named(db, "Alpha").await?;
    factory::kanban_board::create_board_named(db, "Beta").await?;

    let repo = BoardRepository::new(db);
    let (_, total) = repo
        .get_paginated(Some("  "), &PageRequest::unpaginated())
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests that surrounding whitespace is not part of the search.
///
/// Expected: Ok with the one board containing the trimmed text
#[tokio::test]
async fn trims_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::kanban_board::create_board_named(db, "Alpha").await?;
    factory::kanban_board::create_board_named(db, "Beta").await?;

    let repo = BoardRepository::new(db);
    let (boards, total) = repo
        .get_paginated(Some("  alp "), &PageRequest::unpaginated())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(boards[0].name, "Alpha");

    Ok(())
}

/// Tests that `LIKE` wildcards in the search match only themselves.
///
/// Expected: `%`, `_` and `!` find no plain boards, only the board containing them
#[tokio::test]
async fn matches_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::kanban_board::create_board_named(db, "Alpha").await?;
    factory::kanban_board::create_board_named(db, "Beta").await?;
    factory::kanban_board::create_board_named(db, "100% done_now!").await?;

    let repo = BoardRepository::new(db);

    for search in ["%", "_", "!", "0%", "e_n"] {
        let (boards, total) = repo
            .get_paginated(Some(search), &PageRequest::unpaginated())
            .await?;

        assert_eq!(total, 1, "search {:?}", search);
        assert_eq!(boards[0].name, "100% done_now!");
    }

    let (_, total) = repo
        .get_paginated(Some("A_p"), &PageRequest::unpaginated())
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that a lowercase search finds an uppercase name and vice versa.
///
/// Expected: Ok with the board in both cases
#[tokio::test]
async fn search_ignores_case_both_ways() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::kanban_board::create_board_named(db, "ROADMAP").await?;
    factory::kanban_board::create_board_named(db, "backlog").await?;

    let repo = BoardRepository::new(db);

    let (boards, _) = repo
        .get_paginated(Some("road"), &PageRequest::unpaginated())
        .await?;
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].name, "ROADMAP");

    let (boards, _) = repo
        .get_paginated(Some("BACK"), &PageRequest::unpaginated())
        .await?;
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].name, "backlog");

    Ok(())
}
