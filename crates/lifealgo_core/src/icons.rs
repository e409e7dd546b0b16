//! Icon sets: per-state square images at one resolution.
//!
//! Backends hand over a vertical strip of square icons. The strip is sliced
//! top to bottom into states 1, 2, ... and an algorithm that supplies only one
//! resolution gets the other by rescaling.

use crate::descriptor::{AlgoData, IconSize};
use crate::error::{AlgoError, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use lifealgo_data::{Rgb, MAX_ICON_STATES, MAX_STATES};

/// Strip pixels of this color become transparent.
pub const TRANSPARENT_KEY: Rgb = Rgb::BLACK;

/// One optional icon per cell state. Slot 0 (the dead state) is always empty.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet {
    size: u32,
    slots: Vec<Option<RgbaImage>>,
}

impl IconSet {
    #[must_use]
    pub fn empty(size: u32) -> Self {
        Self {
            size,
            slots: vec![None; MAX_STATES],
        }
    }

    /// Edge length of every icon in the set.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn get(&self, state: usize) -> Option<&RgbaImage> {
        self.slots.get(state).and_then(Option::as_ref)
    }

    /// Present icons with their states, in state order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RgbaImage)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(state, slot)| slot.as_ref().map(|img| (state, img)))
    }

    #[must_use]
    pub fn present(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn set(&mut self, state: usize, icon: RgbaImage) {
        if state > 0 && state < self.slots.len() {
            self.slots[state] = Some(icon);
        }
    }
}

/// Cuts a vertical strip of square icons into an icon set of `size`.
///
/// Icons are as wide as the strip; a trailing partial square is ignored and
/// no more than [`MAX_ICON_STATES`] icons are taken. Icons whose width differs
/// from `size` are rescaled.
#[must_use]
pub fn slice_strip(strip: &RgbaImage, size: u32) -> IconSet {
    let mut set = IconSet::empty(size);
    let wd = strip.width();
    if wd == 0 {
        return set;
    }

    let mut count = (strip.height() / wd) as usize;
    if strip.height() % wd != 0 {
        tracing::warn!(
            width = wd,
            height = strip.height(),
            "Icon strip height is not a multiple of its width"
        );
    }
    if count > MAX_ICON_STATES {
        tracing::warn!(count, "Icon strip truncated to {} states", MAX_ICON_STATES);
        count = MAX_ICON_STATES;
    }
    if wd != size {
        tracing::warn!(width = wd, size, "Icon strip rescaled to its resolution");
    }

    for i in 0..count {
        let mut icon = imageops::crop_imm(strip, 0, i as u32 * wd, wd, wd).to_image();
        mask_color(&mut icon, TRANSPARENT_KEY);
        let state = i + 1;
        let icon = if wd == size {
            Ok(icon)
        } else {
            scale_icon(&icon, size, state)
        };
        match icon {
            Ok(icon) => set.set(state, icon),
            Err(e) => tracing::warn!(error = %e, "Leaving icon slot empty"),
        }
    }
    set
}

/// Rescales every present icon to `size`. No source, no result.
#[must_use]
pub fn rescale(source: Option<&IconSet>, size: u32) -> Option<IconSet> {
    let source = source?;
    let mut set = IconSet::empty(size);
    for (state, icon) in source.iter() {
        match scale_icon(icon, size, state) {
            Ok(scaled) => set.set(state, scaled),
            Err(e) => tracing::warn!(error = %e, "Leaving icon slot empty"),
        }
    }
    Some(set)
}

/// Derives whichever resolution is missing from the one that is present.
///
/// Returns the resolution that was derived, if any.
pub fn complete_icon_sets(ad: &mut AlgoData) -> Option<IconSize> {
    let derived = match (ad.icons7x7.is_some(), ad.icons15x15.is_some()) {
        (true, false) => IconSize::Large,
        (false, true) => IconSize::Small,
        _ => return None,
    };
    let source = match derived {
        IconSize::Large => IconSize::Small,
        IconSize::Small => IconSize::Large,
    };
    let scaled = rescale(ad.icons(source), derived.pixels());
    tracing::warn!(
        algo = ad.name(),
        from = source.pixels(),
        to = derived.pixels(),
        "Icon set derived by rescaling"
    );
    *ad.icons_mut(derived) = scaled;
    Some(derived)
}

/// Makes every opaque pixel of color `key` fully transparent.
pub fn mask_color(img: &mut RgbaImage, key: Rgb) {
    for Rgba([r, g, b, a]) in img.pixels_mut() {
        if *r == key.r && *g == key.g && *b == key.b {
            *a = 0;
        }
    }
}

fn scale_icon(icon: &RgbaImage, size: u32, state: usize) -> Result<RgbaImage> {
    if size == 0 || icon.width() == 0 || icon.height() == 0 {
        return Err(AlgoError::IconAllocation { size, state });
    }
    Ok(imageops::resize(icon, size, size, FilterType::Nearest))
}
