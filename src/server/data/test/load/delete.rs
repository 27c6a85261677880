use super::*;

/// Tests deleting an existing load row.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn removes_load_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cargo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::load::create_load(db).await?;

    LoadRepository::new(db).delete(load.id).await?;

    let found = entity::prelude::Load::find_by_id(load.id).one(db).await?;
    assert!(found.is_none());

    Ok(())
}
