use super::*;

/// Tests that the load listing is unfiltered and globally counted.
///
/// Expected: Ok with every load regardless of carrier state
#[tokio::test]
async fn lists_all_loads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::load::create_load(db).await?;
    factory::load::LoadFactory::new(db)
        .carrier(Some(Carrier::boat(1)))
        .build()
        .await?;

    let page = LoadRepository::new(db).get_page(0).await?;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.count, 2);
    assert!(page.next_cursor.is_none());

    Ok(())
}

/// Tests walking a 7-load collection page by page.
///
/// Expected: Ok with pages of 5 and 2, cursor only on the first
#[tokio::test]
async fn walks_collection_in_page_size_steps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..7 {
        factory::load::create_load(db).await?;
    }

    let repo = LoadRepository::new(db);

    let first = repo.get_page(0).await?;
    assert_eq!(first.items.len(), PAGE_SIZE as usize);
    assert_eq!(first.count, 7);
    assert_eq!(first.next_cursor, Some(PAGE_SIZE));

    let second = repo.get_page(PAGE_SIZE).await?;
    assert_eq!(second.items.len(), 2);
    assert!(second.next_cursor.is_none());

    Ok(())
}
