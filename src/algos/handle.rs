//! Host-side universe handle returned by the built-in creators.

use lifealgo_core::{Creator, Poller, Universe};
use std::sync::Arc;

/// A universe as seen by the host: which algorithm it runs, the memory
/// budget it was given and whether it can be interrupted. Cell evolution is
/// left to the algorithm's kernel.
pub struct EngineHandle {
    algo: &'static str,
    max_memory: Option<i32>,
    poller: Option<Arc<dyn Poller>>,
}

impl EngineHandle {
    #[must_use]
    pub fn new(algo: &'static str) -> Self {
        Self {
            algo,
            max_memory: None,
            poller: None,
        }
    }

    /// Creator capability producing handles for `algo`.
    #[must_use]
    pub fn creator(algo: &'static str) -> Creator {
        Creator::new(move || Some(Box::new(EngineHandle::new(algo)) as Box<dyn Universe>))
    }

    #[must_use]
    pub fn algo(&self) -> &'static str {
        self.algo
    }

    /// Asks the shared poller whether to keep going. Without a poller the
    /// universe cannot be interrupted.
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| p.poll())
    }
}

impl Universe for EngineHandle {
    fn set_max_memory(&mut self, megabytes: i32) {
        tracing::debug!(algo = self.algo, megabytes, "Memory budget applied");
        self.max_memory = Some(megabytes);
    }

    fn max_memory(&self) -> Option<i32> {
        self.max_memory
    }

    fn set_poller(&mut self, poller: Arc<dyn Poller>) {
        self.poller = Some(poller);
    }

    fn has_poller(&self) -> bool {
        self.poller.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifealgo_core::InterruptPoller;

    #[test]
    fn test_handle_records_settings() {
        let mut handle = EngineHandle::new("QuickLife");
        assert!(!handle.should_stop());
        handle.set_max_memory(64);

        let poller = Arc::new(InterruptPoller::new());
        handle.set_poller(poller.clone());
        assert_eq!(handle.max_memory(), Some(64));
        assert!(!handle.should_stop());
        poller.set_interrupted();
        assert!(handle.should_stop());
    }

    #[test]
    fn test_creator_yields_handle() {
        let universe = EngineHandle::creator("HashLife").create().unwrap();
        assert_eq!(universe.max_memory(), None);
        assert!(!universe.has_poller());
    }
}
