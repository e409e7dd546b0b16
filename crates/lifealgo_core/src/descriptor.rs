//! Per-algorithm registry entry.
//!
//! A backend fills in identity, creator, memory budget, state count and any
//! colors or icons it has. The registry's post-processing pass derives the
//! rest: status color, hashing flag, the missing icon resolution, fallback
//! colors and the current color scheme.

use crate::error::Result;
use crate::icons::{slice_strip, IconSet};
use crate::universe::Creator;
use crate::xpm;
use lifealgo_data::{Gradient, Rgb, MAX_STATES, MIN_STATES};

/// Memory budget meaning "let the engine decide".
pub const UNLIMITED_MEMORY: i32 = -1;

/// Default base step of algorithms that hash their universe.
pub const HASHING_BASE: u32 = 8;

/// The two icon resolutions every algorithm may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    Small,
    Large,
}

impl IconSize {
    pub const ALL: [IconSize; 2] = [IconSize::Small, IconSize::Large];

    #[must_use]
    pub const fn pixels(self) -> u32 {
        match self {
            IconSize::Small => 7,
            IconSize::Large => 15,
        }
    }
}

/// Static and user-adjustable data for one registered algorithm.
#[derive(Debug, Clone)]
pub struct AlgoData {
    id: usize,
    pub name: Option<String>,
    pub creator: Option<Creator>,
    /// Memory budget in megabytes, or [`UNLIMITED_MEMORY`].
    pub max_memory: i32,
    pub default_base: u32,
    pub max_states: usize,
    pub def_colors: [Rgb; MAX_STATES],
    pub def_gradient: Gradient,
    pub icons7x7: Option<IconSet>,
    pub icons15x15: Option<IconSet>,
    pub(crate) colors: [Rgb; MAX_STATES],
    pub(crate) gradient: Gradient,
    pub(crate) status_rgb: Rgb,
    pub(crate) can_hash: bool,
}

impl AlgoData {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            name: None,
            creator: None,
            max_memory: 0,
            default_base: 0,
            max_states: MIN_STATES,
            def_colors: [Rgb::BLACK; MAX_STATES],
            def_gradient: Gradient::default(),
            icons7x7: None,
            icons15x15: None,
            colors: [Rgb::BLACK; MAX_STATES],
            gradient: Gradient::default(),
            status_rgb: Rgb::WHITE,
            can_hash: false,
        }
    }

    /// Position in registration order.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name; empty until the backend sets one.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_creator(&mut self, creator: Creator) -> &mut Self {
        self.creator = Some(creator);
        self
    }

    /// Copies `colors` into the declared defaults starting at state 0.
    pub fn set_default_colors(&mut self, colors: &[Rgb]) -> &mut Self {
        let n = colors.len().min(MAX_STATES);
        self.def_colors[..n].copy_from_slice(&colors[..n]);
        self
    }

    /// Decodes an XPM icon strip and stores it at the given resolution.
    pub fn create_icon_sets(&mut self, size: IconSize, xpm_rows: &[&str]) -> Result<()> {
        let strip = xpm::decode(xpm_rows)?;
        let set = slice_strip(&strip, size.pixels());
        *self.icons_mut(size) = Some(set);
        Ok(())
    }

    #[must_use]
    pub fn icons(&self, size: IconSize) -> Option<&IconSet> {
        match size {
            IconSize::Small => self.icons7x7.as_ref(),
            IconSize::Large => self.icons15x15.as_ref(),
        }
    }

    pub(crate) fn icons_mut(&mut self, size: IconSize) -> &mut Option<IconSet> {
        match size {
            IconSize::Small => &mut self.icons7x7,
            IconSize::Large => &mut self.icons15x15,
        }
    }

    #[must_use]
    pub fn status_rgb(&self) -> Rgb {
        self.status_rgb
    }

    #[must_use]
    pub fn can_hash(&self) -> bool {
        self.can_hash
    }

    /// Declared default colors for states `0..max_states`.
    #[must_use]
    pub fn default_colors(&self) -> &[Rgb] {
        &self.def_colors[..self.state_count()]
    }

    /// Current colors for states `0..max_states`.
    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors[..self.state_count()]
    }

    #[must_use]
    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    /// Changes the current color of one state. Returns false when `state`
    /// is beyond this algorithm's state count.
    pub fn set_current_color(&mut self, state: usize, rgb: Rgb) -> bool {
        if state >= self.state_count() {
            return false;
        }
        self.colors[state] = rgb;
        true
    }

    pub fn set_current_gradient(&mut self, gradient: Gradient) {
        self.gradient = gradient;
    }

    /// Resets the current scheme to the defaults.
    pub fn restore_default_colors(&mut self) {
        self.gradient = self.def_gradient;
        let n = self.state_count();
        self.colors[..n].copy_from_slice(&self.def_colors[..n]);
    }

    /// Colors used to draw each state with the current scheme applied.
    #[must_use]
    pub fn cell_colors(&self) -> Vec<Rgb> {
        let mut out = self.colors().to_vec();
        if self.gradient.enabled {
            let live = out.len() - 1;
            for (state, color) in out.iter_mut().enumerate().skip(1) {
                *color = self.gradient.color_at(state, live);
            }
        }
        out
    }

    fn state_count(&self) -> usize {
        self.max_states.clamp(MIN_STATES, MAX_STATES)
    }
}
