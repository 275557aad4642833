//! Thread synchronisation primitives
pub mod queue;
pub mod iter;
