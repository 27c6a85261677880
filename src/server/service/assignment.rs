use entity::{
    boat::{LoadRef, LoadRefs},
    load::Carrier,
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{boat::BoatRepository, load::LoadRepository},
    error::AppError,
};

/// Message returned when either side of an assignment does not resolve.
pub const PAIR_NOT_FOUND: &str = "The specified boat and/or load does not exist";

/// Maintains the bidirectional boat↔load relationship.
///
/// Every operation re-reads both records inside a single transaction, applies
/// the symmetric mutation, and commits; a failure between the two writes
/// rolls back rather than leaving a dangling reference.
pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns the load to the boat.
    ///
    /// # Returns
    /// - `Ok(())`: Carrier set and boat list extended
    /// - `Err(AppError::NotFound)`: Either record is missing; nothing changed
    /// - `Err(AppError::LoadAlreadyAssigned)`: The load already has a
    ///   carrier, even when it is this boat; nothing changed
    pub async fn assign(&self, boat_id: i32, load_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        match Self::assign_in(&txn, boat_id, load_id).await {
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

    async fn assign_in(
        txn: &DatabaseTransaction,
        boat_id: i32,
        load_id: i32,
    ) -> Result<(), AppError> {
        let boats = BoatRepository::new(txn);
        let loads = LoadRepository::new(txn);

        let boat = boats
            .get_by_id(boat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;
        let load = loads
            .get_by_id(load_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;

        if load.carrier.is_some() {
            return Err(AppError::LoadAlreadyAssigned);
        }

        loads
            .set_carrier(load, Some(Carrier::boat(boat_id)))
            .await?;

        let mut refs = boat.loads.clone().unwrap_or(LoadRefs(Vec::new()));
        refs.0.push(LoadRef { id: load_id });
        boats.set_loads(boat, Some(refs)).await?;

        Ok(())
    }

    /// Removes the load from the boat.
    ///
    /// # Returns
    /// - `Ok(())`: Boat list entry removed (collapsed to null when it was the
    ///   last one) and carrier cleared
    /// - `Err(AppError::NotFound)`: Either record is missing; nothing changed
    /// - `Err(AppError::LoadNotAssignedToBoat)`: The load's carrier is not
    ///   this boat; nothing changed
    pub async fn unassign(&self, boat_id: i32, load_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        match Self::unassign_in(&txn, boat_id, load_id).await {
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

    async fn unassign_in(
        txn: &DatabaseTransaction,
        boat_id: i32,
        load_id: i32,
    ) -> Result<(), AppError> {
        let boats = BoatRepository::new(txn);
        let loads = LoadRepository::new(txn);

        let boat = boats
            .get_by_id(boat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;
        let load = loads
            .get_by_id(load_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PAIR_NOT_FOUND.to_string()))?;

        if load.carrier.as_ref().and_then(|c| c.boat_id()) != Some(boat_id) {
            return Err(AppError::LoadNotAssignedToBoat);
        }

        let mut refs = boat.loads.clone().unwrap_or(LoadRefs(Vec::new()));
        refs.0.retain(|r| r.id != load_id);
        let new_refs = if refs.0.is_empty() { None } else { Some(refs) };
        boats.set_loads(boat, new_refs).await?;

        loads.set_carrier(load, None).await?;

        Ok(())
    }
}
