use entity::load;
use serde::{Deserialize, Serialize};

use crate::server::util::links;

/// Hyperlinked reference to the carrying boat, embedded in load
/// representations.
///
/// `name` is filled by the read-assembly layer when the boat record is
/// available; a reference whose boat has gone missing keeps a bare id.
#[derive(Serialize, Deserialize)]
pub struct CarrierDto {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Externally-visible load representation.
///
/// `carrier` keeps the stored single-element-list shape, or null while the
/// load is unassigned.
#[derive(Serialize, Deserialize)]
pub struct LoadDto {
    pub id: i32,
    pub volume: f64,
    pub content: String,
    pub creation_date: String,
    pub carrier: Option<Vec<CarrierDto>>,
    #[serde(rename = "self")]
    pub self_link: String,
}

impl LoadDto {
    /// Builds the representation, attaching the load's `self` link and
    /// enriching the carrier reference with the boat's name and link.
    ///
    /// # Arguments
    /// - `model`: Stored load record
    /// - `carrier_name`: Name of the carrying boat, when resolved
    /// - `base`: Configured application origin for link construction
    pub fn from_model(model: load::Model, carrier_name: Option<String>, base: &str) -> Self {
        let carrier = model.carrier.map(|c| {
            c.0.into_iter()
                .map(|r| CarrierDto {
                    id: r.id,
                    name: carrier_name.clone(),
                    self_link: links::boat_link(base, r.id),
                })
                .collect()
        });

        Self {
            id: model.id,
            volume: model.volume,
            content: model.content,
            creation_date: model.creation_date,
            carrier,
            self_link: links::load_link(base, model.id),
        }
    }
}
