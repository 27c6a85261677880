use entity::load::{self, Carrier};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{Page, PAGE_SIZE},
    model::load::{LoadFields, LoadPatch},
};

pub struct LoadRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new unassigned load.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created load with its store-assigned id
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, fields: LoadFields) -> Result<load::Model, DbErr> {
        load::ActiveModel {
            volume: ActiveValue::Set(fields.volume),
            content: ActiveValue::Set(fields.content),
            creation_date: ActiveValue::Set(fields.creation_date),
            carrier: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a load by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The load
    /// - `Ok(None)`: No load with this id exists
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<load::Model>, DbErr> {
        entity::prelude::Load::find_by_id(id).one(self.db).await
    }

    /// Gets several loads by id, preserving the requested order.
    ///
    /// Ids with no matching row are skipped.
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<load::Model>, DbErr> {
        let found = entity::prelude::Load::find()
            .filter(load::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        let ordered = ids
            .iter()
            .filter_map(|id| found.iter().find(|l| l.id == *id).cloned())
            .collect();
        Ok(ordered)
    }

    /// Gets one page of loads.
    ///
    /// The listing is unfiltered; every caller sees the same collection.
    /// Issues a count query separate from the page select, like the boat
    /// listing.
    ///
    /// # Arguments
    /// - `offset`: Decoded cursor, 0 for the first page
    pub async fn get_page(&self, offset: u64) -> Result<Page<load::Model>, DbErr> {
        let count = entity::prelude::Load::find().count(self.db).await?;

        let items = entity::prelude::Load::find()
            .order_by_asc(load::Column::Id)
            .offset(offset)
            .limit(PAGE_SIZE)
            .all(self.db)
            .await?;

        let next_cursor = if offset + (items.len() as u64) < count {
            Some(offset + PAGE_SIZE)
        } else {
            None
        };

        Ok(Page {
            items,
            count,
            next_cursor,
        })
    }

    /// Applies a partial update to the load's writable attributes.
    ///
    /// Absent attributes keep their stored values; the carrier slot is never
    /// touched.
    pub async fn update_fields(
        &self,
        load: load::Model,
        patch: LoadPatch,
    ) -> Result<load::Model, DbErr> {
        let mut active = load.into_active_model();
        if let Some(volume) = patch.volume {
            active.volume = ActiveValue::Set(volume);
        }
        if let Some(content) = patch.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(creation_date) = patch.creation_date {
            active.creation_date = ActiveValue::Set(creation_date);
        }
        active.update(self.db).await
    }

    /// Replaces all writable attributes, preserving the carrier slot.
    pub async fn replace_fields(
        &self,
        load: load::Model,
        fields: LoadFields,
    ) -> Result<load::Model, DbErr> {
        let mut active = load.into_active_model();
        active.volume = ActiveValue::Set(fields.volume);
        active.content = ActiveValue::Set(fields.content);
        active.creation_date = ActiveValue::Set(fields.creation_date);
        active.update(self.db).await
    }

    /// Overwrites the load's carrier slot.
    pub async fn set_carrier(
        &self,
        load: load::Model,
        carrier: Option<Carrier>,
    ) -> Result<load::Model, DbErr> {
        let mut active = load.into_active_model();
        active.carrier = ActiveValue::Set(carrier);
        active.update(self.db).await
    }

    /// Deletes the load record by id.
    ///
    /// Does not cascade; the service layer updates the carrying boat first.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Load::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
