use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a process-unique counter value for generating distinct default
/// names. Boat names must be unique across the whole table, so factories use
/// this to avoid accidental collisions between tests sharing a database.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
