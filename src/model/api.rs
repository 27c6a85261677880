use serde::{Deserialize, Serialize};

/// Error body shape used across the API.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(rename = "Error")]
    pub error: String,
}

/// One page of a listed collection.
///
/// `count` is the size of the whole filtered collection, not the page.
/// `next` is present only when more results remain past this page.
#[derive(Serialize, Deserialize)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
