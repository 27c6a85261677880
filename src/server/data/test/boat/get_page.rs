use super::*;

/// Tests that a collection smaller than one page returns everything and no
/// cursor.
///
/// Expected: Ok with all boats, count 3, no next cursor
#[tokio::test]
async fn single_page_has_no_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::boat::create_boat(db, "auth0|captain").await?;
    }

    let page = BoatRepository::new(db).get_page("auth0|captain", 0).await?;
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.count, 3);
    assert!(page.next_cursor.is_none());

    Ok(())
}

/// Tests walking a 12-boat collection page by page.
///
/// Verifies page sizes of 5, 5, and 2, with a cursor present only while more
/// results remain, and a stable id ordering across pages.
///
/// Expected: Ok for every page
#[tokio::test]
async fn walks_collection_in_page_size_steps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::boat::create_boat(db, "auth0|captain").await?.id);
    }

    let repo = BoatRepository::new(db);

    let first = repo.get_page("auth0|captain", 0).await?;
    assert_eq!(first.items.len(), PAGE_SIZE as usize);
    assert_eq!(first.count, 12);
    assert_eq!(first.next_cursor, Some(PAGE_SIZE));

    let second = repo.get_page("auth0|captain", PAGE_SIZE).await?;
    assert_eq!(second.items.len(), PAGE_SIZE as usize);
    assert_eq!(second.next_cursor, Some(PAGE_SIZE * 2));

    let third = repo.get_page("auth0|captain", PAGE_SIZE * 2).await?;
    assert_eq!(third.items.len(), 2);
    assert!(third.next_cursor.is_none());

    let walked: Vec<i32> = first
        .items
        .iter()
        .chain(second.items.iter())
        .chain(third.items.iter())
        .map(|b| b.id)
        .collect();
    assert_eq!(walked, ids);

    Ok(())
}

/// Tests that the listing and its count only cover the requesting owner.
///
/// Expected: Ok with only the owner's boats and an owner-scoped count
#[tokio::test]
async fn filters_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..2 {
        factory::boat::create_boat(db, "auth0|captain").await?;
    }
    for _ in 0..4 {
        factory::boat::create_boat(db, "auth0|other").await?;
    }

    let page = BoatRepository::new(db).get_page("auth0|captain", 0).await?;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.count, 2);
    assert!(page.items.iter().all(|b| b.owner == "auth0|captain"));

    Ok(())
}

/// Tests paging past the end of the collection.
///
/// Expected: Ok with an empty page and no cursor
#[tokio::test]
async fn offset_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::create_boat(db, "auth0|captain").await?;

    let page = BoatRepository::new(db)
        .get_page("auth0|captain", PAGE_SIZE * 3)
        .await?;
    assert!(page.items.is_empty());
    assert_eq!(page.count, 1);
    assert!(page.next_cursor.is_none());

    Ok(())
}
