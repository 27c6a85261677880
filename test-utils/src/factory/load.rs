//! Load factory for creating test load entities.

use entity::load::Carrier;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test loads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::load::LoadFactory;
///
/// let load = LoadFactory::new(&db)
///     .volume(40.0)
///     .carrier(Some(Carrier::boat(boat.id)))
///     .build()
///     .await?;
/// ```
pub struct LoadFactory<'a> {
    db: &'a DatabaseConnection,
    volume: f64,
    content: String,
    creation_date: String,
    carrier: Option<Carrier>,
}

impl<'a> LoadFactory<'a> {
    /// Creates a new LoadFactory with default values.
    ///
    /// Defaults:
    /// - volume: `10.0`
    /// - content: `"Cargo {n}"` where n is a process-unique counter
    /// - creation_date: `"01/01/2021"`
    /// - carrier: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            volume: 10.0,
            content: format!("Cargo {}", next_id()),
            creation_date: "01/01/2021".to_string(),
            carrier: None,
        }
    }

    /// Overrides the load volume.
    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Overrides the load content description.
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Overrides the creation date string.
    pub fn creation_date(mut self, creation_date: &str) -> Self {
        self.creation_date = creation_date.to_string();
        self
    }

    /// Sets the stored carrier slot directly.
    ///
    /// Does not touch the referenced boat's loads column; combine with
    /// `BoatFactory::loads` when a symmetric pair is wanted.
    pub fn carrier(mut self, carrier: Option<Carrier>) -> Self {
        self.carrier = carrier;
        self
    }

    /// Inserts the load into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created load
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::load::Model, DbErr> {
        entity::load::ActiveModel {
            volume: ActiveValue::Set(self.volume),
            content: ActiveValue::Set(self.content),
            creation_date: ActiveValue::Set(self.creation_date),
            carrier: ActiveValue::Set(self.carrier),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unassigned load with default values.
pub async fn create_load(db: &DatabaseConnection) -> Result<entity::load::Model, DbErr> {
    LoadFactory::new(db).build().await
}
