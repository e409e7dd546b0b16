//! HashLife: hashed two-state algorithm. Always registered second.

use super::handle::EngineHandle;
use super::xpm_data::LIFE_15X15;
use lifealgo_core::{AlgoData, IconSize, Result, HASHING_BASE};
use lifealgo_data::{Gradient, Rgb};

pub const NAME: &str = "HashLife";

/// Hash table budget in megabytes.
pub const DEFAULT_MAX_MEMORY: i32 = 300;

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = DEFAULT_MAX_MEMORY;
    ad.default_base = HASHING_BASE;
    ad.max_states = 2;
    ad.set_default_colors(&[Rgb::new(48, 48, 48), Rgb::WHITE]);
    ad.def_gradient = Gradient::new(false, Rgb::new(255, 0, 0), Rgb::new(255, 255, 0));
    ad.create_icon_sets(IconSize::Large, LIFE_15X15)?;
    Ok(())
}
