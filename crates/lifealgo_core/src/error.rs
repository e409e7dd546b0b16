//! Error types for lifealgo_core.
//!
//! Configuration defects found while finishing the registry are fatal: the
//! host is expected to exit with the diagnostic. Icon allocation failures are
//! recoverable and only ever leave an icon slot empty.

use thiserror::Error;

/// Main error type for registry and factory operations.
#[derive(Error, Debug)]
pub enum AlgoError {
    /// A backend registered without naming itself.
    #[error("Algorithm {index} did not set its name")]
    MissingName { index: usize },

    /// A backend registered without a way to create universes.
    #[error("Algorithm {index} ({name}) did not set its creator")]
    MissingCreator { index: usize, name: String },

    /// A backend declared a state count outside 2..=256.
    #[error("Algorithm {name} declared {max_states} states (expected 2..=256)")]
    InvalidStateCount { name: String, max_states: usize },

    /// The creator of a registered algorithm produced no universe.
    #[error("Failed to create new {name} universe")]
    InstanceCreation { name: String },

    /// An icon image could not be allocated.
    #[error("Could not allocate {size}x{size} icon for state {state}")]
    IconAllocation { size: u32, state: usize },

    /// Malformed XPM icon data
    #[error("XPM error: {0}")]
    Xpm(String),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for lifealgo_core operations.
pub type Result<T> = std::result::Result<T, AlgoError>;

impl AlgoError {
    /// Creates a new XPM error.
    #[must_use]
    pub fn xpm<S: Into<String>>(msg: S) -> Self {
        Self::Xpm(msg.into())
    }

    /// Creates a new config error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors that leave the registry or the caller unusable.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingName { .. }
                | Self::MissingCreator { .. }
                | Self::InvalidStateCount { .. }
                | Self::InstanceCreation { .. }
        )
    }
}
