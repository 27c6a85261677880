use super::*;

/// Tests creating a boat from a valid body.
///
/// Expected: Ok with the owner recorded and loads null
#[tokio::test]
async fn creates_boat_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = BoatService::new(db)
        .create(
            &body(json!({"name": "Sea Witch", "type": "Catamaran", "length": 28})),
            "auth0|captain",
        )
        .await
        .unwrap();

    assert_eq!(boat.name, "Sea Witch");
    assert_eq!(boat.owner, "auth0|captain");
    assert!(boat.loads.is_none());

    Ok(())
}

/// Tests creating a boat whose name another boat already uses.
///
/// Expected: Err(DuplicateName), nothing inserted
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
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

    let result = BoatService::new(db)
        .create(
            &body(json!({"name": "Sea Witch", "type": "Catamaran", "length": 28})),
            "auth0|captain",
        )
        .await;

    assert!(matches!(result, Err(AppError::DuplicateName)));

    let count = entity::prelude::Boat::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the duplicate scan runs before field validation.
///
/// The body carries both a colliding name and an invalid length; the
/// duplicate must win.
///
/// Expected: Err(DuplicateName), not a validation error
#[tokio::test]
async fn duplicate_scan_precedes_field_checks() -> Result<(), DbErr> {
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

    let result = BoatService::new(db)
        .create(
            &body(json!({"name": "Sea Witch", "type": "Catamaran", "length": -5})),
            "auth0|captain",
        )
        .await;

    assert!(matches!(result, Err(AppError::DuplicateName)));

    Ok(())
}

/// Tests creating a boat with a bad field and a free name.
///
/// Expected: Err(Validation), nothing inserted
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoatService::new(db)
        .create(
            &body(json!({"name": "Sea Witch", "type": "Catamaran", "length": 0})),
            "auth0|captain",
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(entity::prelude::Boat::find().all(db).await?.is_empty());

    Ok(())
}
