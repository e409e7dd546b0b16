//! Process-scoped application context.
//!
//! Built once at startup, it owns the algorithm registry, the shared poller
//! handed to interruptible universes and the currently selected algorithm.

use crate::algos;
use lifealgo_core::{
    AlgoConfig, AlgoData, AlgoError, InterruptPoller, Poller, Registry, Result, Universe,
    UniverseFactory,
};
use std::sync::Arc;

pub struct AppContext {
    pub config: AlgoConfig,
    registry: Registry,
    poller: Arc<InterruptPoller>,
    current: usize,
}

impl AppContext {
    /// Registers the built-in algorithms and selects the configured one.
    pub fn startup(config: AlgoConfig) -> Result<Self> {
        let registry = algos::init_algorithms(&config)?;
        Self::with_registry(config, registry)
    }

    /// Wraps an already finished registry.
    pub fn with_registry(config: AlgoConfig, registry: Registry) -> Result<Self> {
        if config.initial_algo >= registry.count() {
            return Err(AlgoError::config(format!(
                "initial_algo {} out of range (count {})",
                config.initial_algo,
                registry.count()
            )));
        }
        let mut ctx = Self {
            current: config.initial_algo,
            config,
            registry,
            poller: Arc::new(InterruptPoller::new()),
        };
        ctx.select(ctx.current);
        Ok(ctx)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The registry with write access to the current color schemes.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_algo(&self) -> &AlgoData {
        self.registry.algo(self.current)
    }

    /// Switches to algorithm `index` and checks its menu entry.
    ///
    /// # Panics
    /// Panics if `index` is not a registered algorithm.
    pub fn select(&mut self, index: usize) {
        let name = self.registry.name_of(index).to_string();
        let id = self.registry.action_id(index);
        self.registry.menu_mut().check_only(id);
        self.current = index;
        tracing::info!(algo = %name, "Selected algorithm");
    }

    /// Handles a menu action; returns false for ids that are not ours.
    pub fn handle_menu_action(&mut self, id: u32) -> bool {
        match self.registry.algo_for_action(id) {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn poller(&self) -> Arc<InterruptPoller> {
        Arc::clone(&self.poller)
    }

    #[must_use]
    pub fn factory(&self) -> UniverseFactory<'_> {
        UniverseFactory::new(&self.registry, self.poller.clone() as Arc<dyn Poller>)
    }

    /// Creates a universe running the current algorithm.
    pub fn new_universe(&self, allow_check: bool) -> Result<Box<dyn Universe>> {
        self.poller.reset_interrupted();
        self.factory().create(self.current, allow_check)
    }

    /// Asks any running, interruptible universe to stop.
    pub fn interrupt(&self) {
        self.poller.set_interrupted();
    }
}
