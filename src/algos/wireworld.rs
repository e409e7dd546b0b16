//! WireWorld: four-state electronic circuit rule.

use super::handle::EngineHandle;
use super::hlife::DEFAULT_MAX_MEMORY;
use super::xpm_data::WIREWORLD_15X15;
use lifealgo_core::{AlgoData, IconSize, Result, HASHING_BASE};
use lifealgo_data::Rgb;

pub const NAME: &str = "WireWorld";

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = DEFAULT_MAX_MEMORY;
    ad.default_base = HASHING_BASE;
    ad.max_states = 4;
    ad.set_default_colors(&[
        Rgb::new(48, 48, 48),
        Rgb::new(0, 128, 255),  // electron head
        Rgb::new(255, 255, 255), // electron tail
        Rgb::new(255, 128, 0),  // conductor
    ]);
    ad.create_icon_sets(IconSize::Large, WIREWORLD_15X15)?;
    Ok(())
}
