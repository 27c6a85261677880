use super::*;

/// Tests a partial update touching a single attribute.
///
/// Expected: Ok with only the volume changed
#[tokio::test]
async fn patch_changes_only_present_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::load::LoadFactory::new(db)
        .volume(10.0)
        .content("LEGO Blocks")
        .creation_date("10/15/2022")
        .build()
        .await?;

    let updated = LoadRepository::new(db)
        .update_fields(
            load,
            LoadPatch {
                volume: Some(99.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.volume, 99.0);
    assert_eq!(updated.content, "LEGO Blocks");
    assert_eq!(updated.creation_date, "10/15/2022");

    Ok(())
}

/// Tests a full replace of the writable attributes.
///
/// Expected: Ok with all three replaced and the carrier slot untouched
#[tokio::test]
async fn replace_preserves_carrier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::load::LoadFactory::new(db)
        .carrier(Some(Carrier::boat(4)))
        .build()
        .await?;

    let replaced = LoadRepository::new(db)
        .replace_fields(
            load,
            LoadFields {
                volume: 60.0,
                content: "Bricks".to_string(),
                creation_date: "03/01/2023".to_string(),
            },
        )
        .await?;

    assert_eq!(replaced.volume, 60.0);
    assert_eq!(replaced.content, "Bricks");
    assert_eq!(replaced.creation_date, "03/01/2023");
    assert_eq!(replaced.carrier, Some(Carrier::boat(4)));

    Ok(())
}

/// Tests overwriting the carrier slot.
///
/// Expected: Ok with the slot set, then cleared to null
#[tokio::test]
async fn set_carrier_overwrites_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::load::create_load(db).await?;
    let repo = LoadRepository::new(db);

    let load = repo.set_carrier(load, Some(Carrier::boat(2))).await?;
    assert_eq!(load.carrier.as_ref().and_then(|c| c.boat_id()), Some(2));

    let load = repo.set_carrier(load, None).await?;
    assert!(load.carrier.is_none());

    Ok(())
}
