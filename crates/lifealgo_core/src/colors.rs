//! Default and current color schemes.

use crate::descriptor::AlgoData;
use lifealgo_data::{status_color, Rgb, DEFAULT_PALETTE};

/// True when the declared defaults look unset: state 0 and state 1 share
/// all three channels.
///
/// A backend whose first two states really are the same color also matches.
#[must_use]
pub fn defaults_look_unset(defaults: &[Rgb]) -> bool {
    match defaults {
        [dead, live, ..] => dead.r == live.r && dead.g == live.g && dead.b == live.b,
        _ => false,
    }
}

/// Overwrites `colors` with consecutive triples from [`DEFAULT_PALETTE`].
pub fn fill_from_palette(colors: &mut [Rgb]) {
    for (color, rgb) in colors.iter_mut().zip(DEFAULT_PALETTE.chunks_exact(3)) {
        *color = Rgb::new(rgb[0], rgb[1], rgb[2]);
    }
}

/// Replaces every declared default with the shared palette if the defaults
/// look unset. Returns whether the fallback applied.
pub fn apply_default_fallback(ad: &mut AlgoData) -> bool {
    let n = ad.default_colors().len();
    if !defaults_look_unset(ad.default_colors()) {
        return false;
    }
    tracing::warn!(
        algo = ad.name(),
        states = n,
        "Default colors look unset, using shared palette"
    );
    fill_from_palette(&mut ad.def_colors[..n]);
    true
}

pub fn assign_status_color(ad: &mut AlgoData) {
    ad.status_rgb = status_color(ad.id());
}

/// Starts the current scheme off as a copy of the defaults.
pub fn snapshot_current(ad: &mut AlgoData) {
    ad.restore_default_colors();
}
