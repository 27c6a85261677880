use entity::boat;
use serde::{Deserialize, Serialize};

use crate::server::util::links;

/// Hyperlinked reference to a carried load, embedded in boat
/// representations.
#[derive(Serialize, Deserialize)]
pub struct LoadRefDto {
    pub id: i32,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Externally-visible boat representation.
///
/// `loads` is null rather than an empty list when the boat carries nothing,
/// matching the stored shape.
#[derive(Serialize, Deserialize)]
pub struct BoatDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub boat_type: String,
    pub length: f64,
    pub owner: String,
    pub loads: Option<Vec<LoadRefDto>>,
    #[serde(rename = "self")]
    pub self_link: String,
}

impl BoatDto {
    /// Builds the representation, attaching a `self` link for the boat and
    /// one for every carried load.
    ///
    /// # Arguments
    /// - `model`: Stored boat record
    /// - `base`: Configured application origin for link construction
    pub fn from_model(model: boat::Model, base: &str) -> Self {
        let loads = model.loads.map(|refs| {
            refs.0
                .into_iter()
                .map(|r| LoadRefDto {
                    id: r.id,
                    self_link: links::load_link(base, r.id),
                })
                .collect()
        });

        Self {
            id: model.id,
            name: model.name,
            boat_type: model.boat_type,
            length: model.length,
            owner: model.owner,
            loads,
            self_link: links::boat_link(base, model.id),
        }
    }
}
