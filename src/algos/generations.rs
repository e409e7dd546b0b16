//! Generations: multi-state rules where dying cells fade through states.

use super::handle::EngineHandle;
use super::hlife::DEFAULT_MAX_MEMORY;
use lifealgo_core::{AlgoData, Result, HASHING_BASE};
use lifealgo_data::{Gradient, Rgb, MAX_STATES};

pub const NAME: &str = "Generations";

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = DEFAULT_MAX_MEMORY;
    ad.default_base = HASHING_BASE;
    ad.max_states = MAX_STATES;
    // colors left unset; the shared palette fills them in
    ad.def_gradient = Gradient::new(true, Rgb::new(255, 0, 0), Rgb::new(255, 255, 0));
    Ok(())
}
