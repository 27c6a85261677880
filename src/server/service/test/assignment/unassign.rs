use super::*;

/// Tests removing a load from its carrier.
///
/// The boat carried only this load, so its list must collapse back to null
/// rather than an empty list.
///
/// Expected: Ok with carrier cleared and loads null
#[tokio::test]
async fn unassigns_and_collapses_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let load = factory::load::create_load(db).await?;

    let service = AssignmentService::new(db);
    service.assign(boat.id, load.id).await.unwrap();
    service.unassign(boat.id, load.id).await.unwrap();

    let db_load = entity::prelude::Load::find_by_id(load.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_load.carrier.is_none());

    let db_boat = entity::prelude::Boat::find_by_id(boat.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_boat.loads.is_none());

    Ok(())
}

/// Tests removing one of several loads.
///
/// Expected: Ok with the remaining reference still listed
#[tokio::test]
async fn keeps_remaining_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let first = factory::load::create_load(db).await?;
    let second = factory::load::create_load(db).await?;

    let service = AssignmentService::new(db);
    service.assign(boat.id, first.id).await.unwrap();
    service.assign(boat.id, second.id).await.unwrap();
    service.unassign(boat.id, first.id).await.unwrap();

    let db_boat = entity::prelude::Boat::find_by_id(boat.id)
        .one(db)
        .await?
        .unwrap();
    let ids: Vec<i32> = db_boat.loads.unwrap().0.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id]);

    Ok(())
}

/// Tests removing a load carried by a different boat.
///
/// Expected: Err(LoadNotAssignedToBoat), state unchanged
#[tokio::test]
async fn rejects_wrong_carrier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let carrier_boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let other_boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let load = factory::load::create_load(db).await?;

    let service = AssignmentService::new(db);
    service.assign(carrier_boat.id, load.id).await.unwrap();

    let result = service.unassign(other_boat.id, load.id).await;
    assert!(matches!(result, Err(AppError::LoadNotAssignedToBoat)));

    let db_load = entity::prelude::Load::find_by_id(load.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        db_load.carrier.as_ref().and_then(|c| c.boat_id()),
        Some(carrier_boat.id)
    );

    Ok(())
}

/// Tests removing an unassigned load.
///
/// Expected: Err(LoadNotAssignedToBoat)
#[tokio::test]
async fn rejects_unassigned_load() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let load = factory::load::create_load(db).await?;

    let result = AssignmentService::new(db).unassign(boat.id, load.id).await;
    assert!(matches!(result, Err(AppError::LoadNotAssignedToBoat)));

    Ok(())
}

/// Tests that assign followed by unassign restores the original state.
///
/// Expected: Ok with both records back to their unassigned shapes
#[tokio::test]
async fn round_trip_restores_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let load = factory::load::create_load(db).await?;

    let service = AssignmentService::new(db);
    service.assign(boat.id, load.id).await.unwrap();
    service.unassign(boat.id, load.id).await.unwrap();

    let db_boat = entity::prelude::Boat::find_by_id(boat.id)
        .one(db)
        .await?
        .unwrap();
    let db_load = entity::prelude::Load::find_by_id(load.id)
        .one(db)
        .await?
        .unwrap();

    assert!(db_boat.loads.is_none());
    assert!(db_load.carrier.is_none());

    Ok(())
}
