use entity::{boat, load};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde_json::{Map, Value};

use crate::server::{
    data::{boat::BoatRepository, load::LoadRepository, Page},
    error::AppError,
    model::boat::BoatFields,
    service::validation,
};

/// Message returned when a boat id does not resolve.
pub const BOAT_NOT_FOUND: &str = "No boat with this boat_id exists";

/// Orchestrates boat lifecycle operations: validation with the uniqueness
/// scan, CRUD, and the delete cascade that detaches every carried load.
pub struct BoatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a boat by id without enrichment.
    pub async fn get(&self, id: i32) -> Result<Option<boat::Model>, AppError> {
        Ok(BoatRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets one page of the owner's boats.
    pub async fn page(&self, owner: &str, offset: u64) -> Result<Page<boat::Model>, AppError> {
        Ok(BoatRepository::new(self.db).get_page(owner, offset).await?)
    }

    /// Validates and creates a boat owned by the given principal.
    ///
    /// The duplicate-name scan runs before field validation, so a colliding
    /// name reports `DuplicateName` even when other fields are also bad.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created boat
    /// - `Err(AppError::DuplicateName)`: Another boat uses this name
    /// - `Err(AppError::Validation)`: A field failed its check
    pub async fn create(
        &self,
        body: &Map<String, Value>,
        owner: &str,
    ) -> Result<boat::Model, AppError> {
        let fields = self.validate_fields(body).await?;
        Ok(BoatRepository::new(self.db).create(fields, owner).await?)
    }

    /// Validates and applies a partial update to the boat.
    ///
    /// Absent attributes keep their stored values; `owner` and `loads` are
    /// never writable. The duplicate scan only fires when the body actually
    /// carries a name.
    pub async fn patch(
        &self,
        boat: boat::Model,
        body: &Map<String, Value>,
    ) -> Result<boat::Model, AppError> {
        self.check_duplicate_name(body).await?;
        let patch = validation::boat_patch(body)?;
        Ok(BoatRepository::new(self.db).update_fields(boat, patch).await?)
    }

    /// Validates and replaces all writable attributes of the boat.
    ///
    /// `owner` and `loads` are preserved from the stored record.
    pub async fn replace(
        &self,
        boat: boat::Model,
        body: &Map<String, Value>,
    ) -> Result<boat::Model, AppError> {
        let fields = self.validate_fields(body).await?;
        Ok(BoatRepository::new(self.db)
            .replace_fields(boat, fields)
            .await?)
    }

    /// Deletes the boat, first detaching every load it carries.
    ///
    /// Runs in a single transaction: each referenced load's carrier is
    /// cleared, the boat's list is cleared, and the boat row is removed. A
    /// failure anywhere rolls the whole cascade back.
    pub async fn delete(&self, boat_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        match Self::delete_in(&txn, boat_id).await {
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

    async fn delete_in(txn: &DatabaseTransaction, boat_id: i32) -> Result<(), AppError> {
        let boats = BoatRepository::new(txn);
        let loads = LoadRepository::new(txn);

        let boat = boats
            .get_by_id(boat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

        if let Some(refs) = &boat.loads {
            for load_ref in &refs.0 {
                if let Some(load) = loads.get_by_id(load_ref.id).await? {
                    loads.set_carrier(load, None).await?;
                }
            }
        }

        let boat = boats.set_loads(boat, None).await?;
        boats.delete(boat.id).await?;
        Ok(())
    }

    /// Fetches the full load records carried by the boat, in list order.
    pub async fn loads_of(&self, boat: &boat::Model) -> Result<Vec<load::Model>, AppError> {
        let Some(refs) = &boat.loads else {
            return Ok(Vec::new());
        };

        let ids: Vec<i32> = refs.0.iter().map(|r| r.id).collect();
        Ok(LoadRepository::new(self.db).get_many(&ids).await?)
    }

    /// Runs the uniqueness scan followed by field validation, in that order.
    async fn validate_fields(&self, body: &Map<String, Value>) -> Result<BoatFields, AppError> {
        self.check_duplicate_name(body).await?;
        Ok(validation::boat_create(body)?)
    }

    async fn check_duplicate_name(&self, body: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(name) = validation::candidate_name(body) {
            if BoatRepository::new(self.db).name_exists(name).await? {
                return Err(AppError::DuplicateName);
            }
        }
        Ok(())
    }
}
