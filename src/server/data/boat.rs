use entity::boat::{self, LoadRefs};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{Page, PAGE_SIZE},
    model::boat::{BoatFields, BoatPatch},
};

pub struct BoatRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new boat for the given owner with an empty loads list.
    ///
    /// # Arguments
    /// - `fields`: Validated writable attributes
    /// - `owner`: Subject of the authenticated principal
    ///
    /// # Returns
    /// - `Ok(Model)`: The created boat with its store-assigned id
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, fields: BoatFields, owner: &str) -> Result<boat::Model, DbErr> {
        boat::ActiveModel {
            name: ActiveValue::Set(fields.name),
            boat_type: ActiveValue::Set(fields.boat_type),
            length: ActiveValue::Set(fields.length),
            owner: ActiveValue::Set(owner.to_string()),
            loads: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a boat by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The boat
    /// - `Ok(None)`: No boat with this id exists
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<boat::Model>, DbErr> {
        entity::prelude::Boat::find_by_id(id).one(self.db).await
    }

    /// Checks whether any boat already uses the given name.
    ///
    /// Scans the whole table and compares in code; name uniqueness is a
    /// service-level rule, not a schema constraint.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let boats = entity::prelude::Boat::find().all(self.db).await?;
        Ok(boats.iter().any(|b| b.name == name))
    }

    /// Gets one page of boats owned by the given principal.
    ///
    /// Issues two queries: an owner-filtered count and the page select. The
    /// returned cursor is the offset of the following page, present only when
    /// more results remain.
    ///
    /// # Arguments
    /// - `owner`: Subject whose boats to list
    /// - `offset`: Decoded cursor, 0 for the first page
    pub async fn get_page(&self, owner: &str, offset: u64) -> Result<Page<boat::Model>, DbErr> {
        let count = entity::prelude::Boat::find()
            .filter(boat::Column::Owner.eq(owner))
            .count(self.db)
            .await?;

        let items = entity::prelude::Boat::find()
            .filter(boat::Column::Owner.eq(owner))
            .order_by_asc(boat::Column::Id)
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

    /// Applies a partial update to the boat's writable attributes.
    ///
    /// Absent attributes keep their stored values; `owner` and `loads` are
    /// never touched.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated boat
    /// - `Err(DbErr)`: Database error
    pub async fn update_fields(
        &self,
        boat: boat::Model,
        patch: BoatPatch,
    ) -> Result<boat::Model, DbErr> {
        let mut active = boat.into_active_model();
        if let Some(name) = patch.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(boat_type) = patch.boat_type {
            active.boat_type = ActiveValue::Set(boat_type);
        }
        if let Some(length) = patch.length {
            active.length = ActiveValue::Set(length);
        }
        active.update(self.db).await
    }

    /// Replaces all writable attributes, preserving `owner` and `loads`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The replaced boat
    /// - `Err(DbErr)`: Database error
    pub async fn replace_fields(
        &self,
        boat: boat::Model,
        fields: BoatFields,
    ) -> Result<boat::Model, DbErr> {
        let mut active = boat.into_active_model();
        active.name = ActiveValue::Set(fields.name);
        active.boat_type = ActiveValue::Set(fields.boat_type);
        active.length = ActiveValue::Set(fields.length);
        active.update(self.db).await
    }

    /// Overwrites the boat's load reference list.
    ///
    /// Callers pass `None` rather than an empty list when the last reference
    /// is removed.
    pub async fn set_loads(
        &self,
        boat: boat::Model,
        loads: Option<LoadRefs>,
    ) -> Result<boat::Model, DbErr> {
        let mut active = boat.into_active_model();
        active.loads = ActiveValue::Set(loads);
        active.update(self.db).await
    }

    /// Deletes the boat record by id.
    ///
    /// Does not cascade; the service layer detaches carried loads first.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Boat::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
