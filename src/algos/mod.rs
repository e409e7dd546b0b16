//! Built-in algorithm families and their registration order.

pub mod generations;
pub mod handle;
pub mod hlife;
pub mod jvn;
pub mod qlife;
pub mod ruletable;
pub mod slife;
pub mod wireworld;
mod xpm_data;

pub use handle::EngineHandle;

use lifealgo_core::{AlgoConfig, Registry, RegistryBuilder, Result};

/// Index of QuickLife, the algorithm new layers start with.
pub const QLIFE_ALGO: usize = 0;
/// Index of HashLife.
pub const HLIFE_ALGO: usize = 1;

/// Registers every built-in algorithm in order.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<()> {
    // QuickLife must be first and HashLife second
    builder
        .register(qlife::init_algo_info)?
        .register(hlife::init_algo_info)?;
    // the rest in alphabetical order
    builder
        .register(generations::init_algo_info)?
        .register(jvn::init_algo_info)?
        .register(ruletable::init_algo_info)?
        .register(slife::init_algo_info)?
        .register(wireworld::init_algo_info)?;
    Ok(())
}

/// Registers the built-in algorithms and runs the post-processing pass.
pub fn init_algorithms(config: &AlgoConfig) -> Result<Registry> {
    let mut builder = RegistryBuilder::new();
    register_all(&mut builder)?;
    builder.finish(config)
}
