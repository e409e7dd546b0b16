//! Read-only views of the registry for the command line.

use lifealgo_core::{AlgoData, IconSize, Registry, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One row of `lifealgo list`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlgoSummary {
    pub index: usize,
    pub action_id: u32,
    pub name: String,
    pub status_color: String,
    pub max_states: usize,
    pub max_memory: i32,
    pub can_hash: bool,
    pub icons_7x7: usize,
    pub icons_15x15: usize,
}

impl AlgoSummary {
    #[must_use]
    pub fn new(registry: &Registry, ad: &AlgoData) -> Self {
        let count = |size| ad.icons(size).map_or(0, |set| set.present());
        Self {
            index: ad.id(),
            action_id: registry.action_id(ad.id()),
            name: ad.name().to_string(),
            status_color: ad.status_rgb().to_hex(),
            max_states: ad.max_states,
            max_memory: ad.max_memory,
            can_hash: ad.can_hash(),
            icons_7x7: count(IconSize::Small),
            icons_15x15: count(IconSize::Large),
        }
    }
}

#[must_use]
pub fn summarize(registry: &Registry) -> Vec<AlgoSummary> {
    registry
        .iter()
        .map(|ad| AlgoSummary::new(registry, ad))
        .collect()
}

/// Writes every icon of `ad` as `<name>_<size>x<size>_<state>.png` into
/// `dir`, creating it if needed. Returns the written paths.
pub fn export_icons(ad: &AlgoData, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for size in IconSize::ALL {
        let Some(set) = ad.icons(size) else {
            continue;
        };
        let px = size.pixels();
        for (state, icon) in set.iter() {
            let path = dir.join(format!("{}_{px}x{px}_{state}.png", ad.name()));
            icon.save(&path)?;
            written.push(path);
        }
    }
    tracing::info!(algo = ad.name(), count = written.len(), "Exported icons");
    Ok(written)
}
