//! Hyperlink construction for resource representations.
//!
//! All `self` links are absolute URLs rooted at the externally configured
//! application origin rather than the incoming Host header.

/// Canonical URL of a boat resource.
pub fn boat_link(base: &str, id: i32) -> String {
    format!("{base}/boats/{id}")
}

/// Canonical URL of a load resource.
pub fn load_link(base: &str, id: i32) -> String {
    format!("{base}/loads/{id}")
}

/// Pagination link for the next page of a collection.
///
/// `path` is the collection path including the leading slash, e.g. `/boats`.
pub fn next_page_link(base: &str, path: &str, cursor: u64) -> String {
    format!("{base}{path}?cursor={cursor}")
}
