//! Registry configuration.
//!
//! Read from `lifealgo.toml`; every field falls back to its default.
//!
//! ```toml
//! menu_base_id = 4000
//! initial_algo = 0
//! log_level = "info"
//!
//! [max_memory]
//! HashLife = 500
//! JvN = -1
//! ```

use crate::error::{AlgoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Action id of the first algorithm menu entry.
pub const DEFAULT_MENU_BASE_ID: u32 = 4000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AlgoConfig {
    pub menu_base_id: u32,
    /// Algorithm selected at startup.
    pub initial_algo: usize,
    /// Memory budgets in megabytes keyed by algorithm name; -1 is unlimited.
    pub max_memory: BTreeMap<String, i32>,
    pub log_level: String,
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            menu_base_id: DEFAULT_MENU_BASE_ID,
            initial_algo: 0,
            max_memory: BTreeMap::new(),
            log_level: "info".to_string(),
        }
    }
}

impl AlgoConfig {
    /// Loads the configuration, or the defaults when `path` does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AlgoError::config(e.to_string()))
    }
}
