//! QuickLife: the default two-state algorithm. Always registered first.

use super::handle::EngineHandle;
use super::xpm_data::{LIFE_15X15, LIFE_7X7};
use lifealgo_core::{AlgoData, IconSize, Result, UNLIMITED_MEMORY};
use lifealgo_data::Rgb;

pub const NAME: &str = "QuickLife";

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = UNLIMITED_MEMORY;
    ad.default_base = 10;
    ad.max_states = 2;
    ad.set_default_colors(&[Rgb::new(48, 48, 48), Rgb::WHITE]);
    ad.create_icon_sets(IconSize::Small, LIFE_7X7)?;
    ad.create_icon_sets(IconSize::Large, LIFE_15X15)?;
    Ok(())
}
