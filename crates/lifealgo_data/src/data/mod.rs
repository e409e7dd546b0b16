//! Core data structures for the algorithm registry.

pub mod color;
pub mod palette;
