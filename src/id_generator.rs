use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst)
}
