use super::*;

/// Tests fetching an existing boat by id.
///
/// Expected: Ok with Some(boat)
#[tokio::test]
async fn finds_existing_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;

    let found = BoatRepository::new(db).get_by_id(boat.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, boat.id);

    Ok(())
}

/// Tests fetching an id with no matching boat.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = BoatRepository::new(db).get_by_id(9999).await?;
    assert!(found.is_none());

    Ok(())
}
