/// Writable boat attributes for create and full-replace operations.
///
/// Produced by the validation layer, so the values are already known to be
/// well formed. `owner` and `loads` are never part of a request body; create
/// sets the owner from the authenticated principal and replace preserves both.
#[derive(Clone, Debug, PartialEq)]
pub struct BoatFields {
    pub name: String,
    pub boat_type: String,
    pub length: f64,
}

/// Writable boat attributes for a partial update.
///
/// `None` means the attribute was absent from the request body and keeps its
/// stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoatPatch {
    pub name: Option<String>,
    pub boat_type: Option<String>,
    pub length: Option<f64>,
}
