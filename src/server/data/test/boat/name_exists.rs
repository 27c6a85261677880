use super::*;

/// Tests the uniqueness scan against a taken name.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "auth0|captain")
        .name("Sea Witch")
        .build()
        .await?;

    assert!(BoatRepository::new(db).name_exists("Sea Witch").await?);

    Ok(())
}

/// Tests the uniqueness scan against a free name.
///
/// Expected: Ok(false)
#[tokio::test]
async fn passes_free_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "auth0|captain")
        .name("Sea Witch")
        .build()
        .await?;

    assert!(!BoatRepository::new(db).name_exists("Pequod").await?);

    Ok(())
}

/// Tests that the scan crosses owner boundaries.
///
/// Name uniqueness is global, not per owner, so a name taken by another
/// caller's boat still collides.
///
/// Expected: Ok(true)
#[tokio::test]
async fn scan_is_global_across_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "auth0|other")
        .name("Sea Witch")
        .build()
        .await?;

    assert!(BoatRepository::new(db).name_exists("Sea Witch").await?);

    Ok(())
}
