//! Database repository layer for boats and loads.
//!
//! Repositories handle the raw SeaORM reads and writes for a single entity
//! kind. They are generic over the connection so the service layer can run
//! them either on the shared pool or inside a transaction. Cross-entity
//! consistency (carrier/loads symmetry) is the service layer's job;
//! repositories never touch more than one kind.

pub mod boat;
pub mod load;


/// Number of items returned per listing page.
pub const PAGE_SIZE: u64 = 5;

/// One page of entities plus the bookkeeping needed to build a listing
/// response.
///
/// `count` comes from a count query issued separately from the page query,
/// so it reflects the full filtered collection, not the page.
#[derive(Clone, Debug)]
pub struct Page<T> {
    /// Up to [`PAGE_SIZE`] entities, in id order.
    pub items: Vec<T>,
    /// Total number of entities matching the listing filter.
    pub count: u64,
    /// Offset cursor for the next page when more results remain.
    pub next_cursor: Option<u64>,
}
