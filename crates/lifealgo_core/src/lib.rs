//! # Lifealgo Core
//!
//! Registry of the cellular-automaton algorithms a host can switch between,
//! and the presentation resources derived for each of them.
//!
//! This crate provides:
//! - Ordered registration of backends with fatal checks on incomplete entries
//! - Icon sets at 7x7 and 15x15, deriving whichever size a backend omits
//! - Default color fallback, status colors and the current color scheme
//! - A checkable algorithm menu keyed by stable action ids
//! - Universe creation with memory budgets and a shared poller
//!
//! ## Example
//!
//! ```
//! use lifealgo_core::{AlgoConfig, Creator, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .tick()
//!     .set_name("QuickLife")
//!     .set_creator(Creator::new(|| None));
//! let registry = builder.finish(&AlgoConfig::default()).unwrap();
//!
//! assert_eq!(registry.count(), 1);
//! assert_eq!(registry.menu().entries()[0].label, "QuickLife");
//! ```

/// Default and current color schemes, status colors
pub mod colors;
/// Registry configuration loaded from TOML
pub mod config;
/// Per-algorithm descriptor populated by backends
pub mod descriptor;
/// Error types and result aliases
pub mod error;
/// Icon strip slicing and icon rescaling
pub mod icons;
/// Tracing subscriber setup
pub mod logging;
/// Registration, post-processing and the algorithm menu
pub mod registry;
/// Universe creation capability and poller
pub mod universe;
/// XPM icon strip decoding
pub mod xpm;

pub use config::AlgoConfig;
pub use descriptor::{AlgoData, IconSize, HASHING_BASE, UNLIMITED_MEMORY};
pub use error::{AlgoError, Result};
pub use icons::IconSet;
pub use logging::init_logging;
pub use registry::{AlgoInit, AlgoMenu, MenuEntry, Registry, RegistryBuilder};
pub use universe::{Creator, InterruptPoller, Poller, Universe, UniverseFactory};
