//! RuleTable: rules loaded from external rule tables.

use super::handle::EngineHandle;
use super::hlife::DEFAULT_MAX_MEMORY;
use lifealgo_core::{AlgoData, Result, HASHING_BASE};
use lifealgo_data::MAX_STATES;

pub const NAME: &str = "RuleTable";

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = DEFAULT_MAX_MEMORY;
    ad.default_base = HASHING_BASE;
    ad.max_states = MAX_STATES;
    Ok(())
}
