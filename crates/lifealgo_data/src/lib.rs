//! Plain data shared by the algorithm registry: colors, gradients and the
//! fixed palette tables.

pub mod data;

pub use data::color::{Gradient, Rgb};
pub use data::palette::{
    status_color, DEFAULT_PALETTE, MAX_ICON_STATES, MAX_STATES, MIN_STATES, STATUS_COLORS,
};
