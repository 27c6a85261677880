use super::*;

/// Tests deleting a boat that carries nothing.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_empty_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;

    BoatService::new(db).delete(boat.id).await.unwrap();

    let found = entity::prelude::Boat::find_by_id(boat.id).one(db).await?;
    assert!(found.is_none());

    Ok(())
}

/// Tests deleting a boat that carries several loads.
///
/// Every carried load must survive with its carrier cleared; the loads
/// themselves are never deleted by this cascade.
///
/// Expected: Ok with boat gone and loads detached
#[tokio::test]
async fn detaches_carried_loads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "auth0|captain").await?;
    let first = factory::load::create_load(db).await?;
    let second = factory::load::create_load(db).await?;

    let assignments = AssignmentService::new(db);
    assignments.assign(boat.id, first.id).await.unwrap();
    assignments.assign(boat.id, second.id).await.unwrap();

    BoatService::new(db).delete(boat.id).await.unwrap();

    let found = entity::prelude::Boat::find_by_id(boat.id).one(db).await?;
    assert!(found.is_none());

    for load_id in [first.id, second.id] {
        let load = entity::prelude::Load::find_by_id(load_id)
            .one(db)
            .await?
            .unwrap();
        assert!(load.carrier.is_none());
    }

    Ok(())
}

/// Tests deleting an id with no matching boat.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoatService::new(db).delete(9999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
