use super::*;

/// Tests creating a load with validated fields.
///
/// Verifies the writable attributes are stored and the carrier slot starts
/// null.
///
/// Expected: Ok with load created
#[tokio::test]
async fn creates_unassigned_load() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let load = LoadRepository::new(db)
        .create(LoadFields {
            volume: 45.0,
            content: "LEGO Blocks".to_string(),
            creation_date: "10/15/2022".to_string(),
        })
        .await?;

    assert_eq!(load.volume, 45.0);
    assert_eq!(load.content, "LEGO Blocks");
    assert_eq!(load.creation_date, "10/15/2022");
    assert!(load.carrier.is_none());

    // Verify load exists in database
    let db_load = entity::prelude::Load::find_by_id(load.id).one(db).await?;
    assert!(db_load.is_some());
    assert_eq!(db_load.unwrap().content, "LEGO Blocks");

    Ok(())
}
