/// Writable load attributes for create and full-replace operations.
///
/// Produced by the validation layer. The carrier slot is never part of a
/// request body; create starts unassigned and replace preserves the stored
/// carrier.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadFields {
    pub volume: f64,
    pub content: String,
    pub creation_date: String,
}

/// Writable load attributes for a partial update.
///
/// `None` means the attribute was absent from the request body and keeps its
/// stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadPatch {
    pub volume: Option<f64>,
    pub content: Option<String>,
    pub creation_date: Option<String>,
}
