//! # Lifealgo
//!
//! Built-in cellular-automaton algorithm families, the startup sequence that
//! registers them, and the application context the host reads them through.

pub mod algos;
pub mod app;
pub mod export;

pub use app::AppContext;
