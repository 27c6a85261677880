use entity::load;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde_json::{Map, Value};

use crate::server::{
    data::{boat::BoatRepository, load::LoadRepository, Page},
    error::AppError,
    service::validation,
};

/// Message returned when a load id does not resolve.
pub const LOAD_NOT_FOUND: &str = "No load with this load_id exists";

/// Orchestrates load lifecycle operations: validation, CRUD, and the delete
/// cascade that removes the load's reference from its carrying boat.
///
/// Loads have no ownership concept; any caller may mutate any load. That
/// asymmetry with boats is deliberate.
pub struct LoadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a load by id without enrichment.
    pub async fn get(&self, id: i32) -> Result<Option<load::Model>, AppError> {
        Ok(LoadRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets one page of the unfiltered load collection.
    pub async fn page(&self, offset: u64) -> Result<Page<load::Model>, AppError> {
        Ok(LoadRepository::new(self.db).get_page(offset).await?)
    }

    /// Validates and creates an unassigned load.
    pub async fn create(&self, body: &Map<String, Value>) -> Result<load::Model, AppError> {
        let fields = validation::load_create(body)?;
        Ok(LoadRepository::new(self.db).create(fields).await?)
    }

    /// Validates and applies a partial update to the load.
    ///
    /// Absent attributes keep their stored values; the carrier slot is never
    /// writable through this path.
    pub async fn patch(
        &self,
        load: load::Model,
        body: &Map<String, Value>,
    ) -> Result<load::Model, AppError> {
        let patch = validation::load_patch(body)?;
        Ok(LoadRepository::new(self.db).update_fields(load, patch).await?)
    }

    /// Validates and replaces all writable attributes of the load,
    /// preserving the stored carrier slot.
    pub async fn replace(
        &self,
        load: load::Model,
        body: &Map<String, Value>,
    ) -> Result<load::Model, AppError> {
        let fields = validation::load_create(body)?;
        Ok(LoadRepository::new(self.db)
            .replace_fields(load, fields)
            .await?)
    }

    /// Deletes the load, first removing its reference from the carrying boat.
    ///
    /// Runs in a single transaction: the boat's list entry is removed
    /// (collapsing the list to null when it empties) and the load row is
    /// deleted. An unassigned load just loses its row.
    pub async fn delete(&self, load_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        match Self::delete_in(&txn, load_id).await {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn delete_in(txn: &DatabaseTransaction, load_id: i32) -> Result<(), AppError> {
        let loads = LoadRepository::new(txn);
        let boats = BoatRepository::new(txn);

        let load = loads
            .get_by_id(load_id)
            .await?
            .ok_or_else(|| AppError::NotFound(LOAD_NOT_FOUND.to_string()))?;

        if let Some(boat_id) = load.carrier.as_ref().and_then(|c| c.boat_id()) {
            if let Some(boat) = boats.get_by_id(boat_id).await? {
                if let Some(refs) = &boat.loads {
                    let mut remaining = refs.clone();
                    remaining.0.retain(|r| r.id != load_id);
                    let new_refs = if remaining.0.is_empty() {
                        None
                    } else {
                        Some(remaining)
                    };
                    boats.set_loads(boat, new_refs).await?;
                }
            }
        }

        loads.delete(load_id).await?;
        Ok(())
    }

    /// Name of the boat carrying the load, if any, for read enrichment.
    pub async fn carrier_name(&self, load: &load::Model) -> Result<Option<String>, AppError> {
        let Some(boat_id) = load.carrier.as_ref().and_then(|c| c.boat_id()) else {
            return Ok(None);
        };

        Ok(BoatRepository::new(self.db)
            .get_by_id(boat_id)
            .await?
            .map(|b| b.name))
    }
}
