//! SlowLife: straightforward two-state reference algorithm.

use super::handle::EngineHandle;
use lifealgo_core::{AlgoData, Result, UNLIMITED_MEMORY};

pub const NAME: &str = "SlowLife";

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = UNLIMITED_MEMORY;
    ad.default_base = 10;
    ad.max_states = 2;
    Ok(())
}
