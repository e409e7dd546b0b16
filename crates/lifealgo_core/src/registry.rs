//! Ordered table of registered algorithms.
//!
//! Startup code appends one descriptor per backend with [`RegistryBuilder`],
//! in a fixed order, then calls [`RegistryBuilder::finish`] once to validate
//! and complete every descriptor and build the algorithm menu. The finished
//! [`Registry`] is read-only apart from the current color schemes.

use crate::colors;
use crate::config::AlgoConfig;
use crate::descriptor::{AlgoData, HASHING_BASE};
use crate::error::{AlgoError, Result};
use crate::icons;
use lifealgo_data::{MAX_STATES, MIN_STATES};

/// Backend entry point: populate the freshly appended descriptor.
pub type AlgoInit = fn(&mut AlgoData) -> Result<()>;

/// One checkable entry of the algorithm menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: u32,
    pub label: String,
    pub checked: bool,
}

/// Menu listing every algorithm in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgoMenu {
    base_id: u32,
    entries: Vec<MenuEntry>,
}

impl AlgoMenu {
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    pub fn base_id(&self) -> u32 {
        self.base_id
    }

    /// Checks the entry with action `id` and unchecks the rest. Returns
    /// false if no entry has that id.
    pub fn check_only(&mut self, id: u32) -> bool {
        if !self.entries.iter().any(|e| e.id == id) {
            return false;
        }
        for entry in &mut self.entries {
            entry.checked = entry.id == id;
        }
        true
    }

    #[must_use]
    pub fn checked(&self) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.checked)
    }
}

/// Collects registrations before the post-processing pass.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    algos: Vec<AlgoData>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank descriptor at the next index and hands it out for
    /// the registering backend to fill in.
    pub fn tick(&mut self) -> &mut AlgoData {
        let id = self.algos.len();
        self.algos.push(AlgoData::new(id));
        &mut self.algos[id]
    }

    /// Registers one backend through its entry point.
    pub fn register(&mut self, init: AlgoInit) -> Result<&mut Self> {
        let ad = self.tick();
        init(ad)?;
        tracing::debug!(index = ad.id(), algo = ad.name(), "Registered algorithm");
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.algos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algos.is_empty()
    }

    /// Runs the post-processing pass and builds the menu.
    ///
    /// Every descriptor is validated before any is completed, so a defect in
    /// one of them means no registry and no menu at all.
    pub fn finish(mut self, config: &AlgoConfig) -> Result<Registry> {
        for ad in &self.algos {
            validate(ad)?;
        }

        for (name, megabytes) in &config.max_memory {
            match self.algos.iter_mut().find(|ad| ad.name() == name) {
                Some(ad) => ad.max_memory = *megabytes,
                None => tracing::warn!(algo = %name, "Memory budget for unknown algorithm"),
            }
        }

        let ids = menu_ids(config.menu_base_id, self.algos.len())?;
        let mut menu = AlgoMenu {
            base_id: config.menu_base_id,
            entries: Vec::with_capacity(self.algos.len()),
        };
        for (ad, id) in self.algos.iter_mut().zip(ids) {
            ad.can_hash = ad.default_base == HASHING_BASE;
            colors::assign_status_color(ad);
            icons::complete_icon_sets(ad);
            colors::apply_default_fallback(ad);
            colors::snapshot_current(ad);
            menu.entries.push(MenuEntry {
                id,
                label: ad.name().to_string(),
                checked: false,
            });
        }

        tracing::info!(count = self.algos.len(), "Algorithms initialized");
        Ok(Registry {
            algos: self.algos,
            menu,
        })
    }
}

fn validate(ad: &AlgoData) -> Result<()> {
    if ad.name().is_empty() {
        tracing::error!(index = ad.id(), "Algorithm did not set its name");
        return Err(AlgoError::MissingName { index: ad.id() });
    }
    if ad.creator.is_none() {
        tracing::error!(index = ad.id(), algo = ad.name(), "Algorithm did not set its creator");
        return Err(AlgoError::MissingCreator {
            index: ad.id(),
            name: ad.name().to_string(),
        });
    }
    if !(MIN_STATES..=MAX_STATES).contains(&ad.max_states) {
        return Err(AlgoError::InvalidStateCount {
            name: ad.name().to_string(),
            max_states: ad.max_states,
        });
    }
    Ok(())
}

/// Action ids `base..base + count`, or a config error if they overflow `u32`.
fn menu_ids(base: u32, count: usize) -> Result<Vec<u32>> {
    (0..count)
        .map(|index| {
            u32::try_from(index)
                .ok()
                .and_then(|offset| base.checked_add(offset))
                .ok_or_else(|| {
                    tracing::error!(menu_base_id = base, count, "Menu ids overflow");
                    AlgoError::config(format!(
                        "menu_base_id {base} leaves no room for {count} algorithm menu entries"
                    ))
                })
        })
        .collect()
}

/// The finished algorithm table.
#[derive(Debug)]
pub struct Registry {
    algos: Vec<AlgoData>,
    menu: AlgoMenu,
}

impl Registry {
    #[must_use]
    pub fn count(&self) -> usize {
        self.algos.len()
    }

    /// # Panics
    /// Panics if `index` is not a registered algorithm.
    #[must_use]
    pub fn algo(&self, index: usize) -> &AlgoData {
        self.algos.get(index).unwrap_or_else(|| {
            panic!("algorithm index {index} out of range (count {})", self.algos.len())
        })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AlgoData> {
        self.algos.get(index)
    }

    /// # Panics
    /// Panics if `index` is not a registered algorithm.
    #[must_use]
    pub fn name_of(&self, index: usize) -> &str {
        self.algo(index).name()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.algos.iter().position(|ad| ad.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgoData> {
        self.algos.iter()
    }

    #[must_use]
    pub fn menu(&self) -> &AlgoMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut AlgoMenu {
        &mut self.menu
    }

    /// Action id of the menu entry for `index`.
    ///
    /// # Panics
    /// Panics if `index` is not a registered algorithm.
    #[must_use]
    pub fn action_id(&self, index: usize) -> u32 {
        self.menu.entries.get(index).map_or_else(
            || panic!("algorithm index {index} out of range (count {})", self.algos.len()),
            |entry| entry.id,
        )
    }

    /// Algorithm selected by menu action `id`, if any.
    #[must_use]
    pub fn algo_for_action(&self, id: u32) -> Option<usize> {
        let index = id.checked_sub(self.menu.base_id)? as usize;
        (index < self.algos.len()).then_some(index)
    }
}
