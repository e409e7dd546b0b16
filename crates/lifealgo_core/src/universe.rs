//! Universe creation from registered algorithms.
//!
//! The simulation kernels live outside this crate. All the registry knows
//! about a universe is the [`Universe`] capability set: it can take a memory
//! budget and it can be wired to the process-wide [`Poller`].

use crate::error::{AlgoError, Result};
use crate::registry::Registry;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Cancellation and progress hook handed to long-running universes.
pub trait Poller: Send + Sync {
    /// Called periodically during a computation. Returns true when the
    /// computation should stop.
    fn poll(&self) -> bool;

    fn is_interrupted(&self) -> bool;

    fn set_interrupted(&self);

    fn reset_interrupted(&self);
}

/// Poller driven by a single interrupt flag.
#[derive(Debug, Default)]
pub struct InterruptPoller {
    interrupted: AtomicBool,
    polls: AtomicU64,
}

impl InterruptPoller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a universe has polled.
    #[must_use]
    pub fn poll_count(&self) -> u64 {
        self.polls.load(Ordering::Relaxed)
    }
}

impl Poller for InterruptPoller {
    fn poll(&self) -> bool {
        self.polls.fetch_add(1, Ordering::Relaxed);
        self.is_interrupted()
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }

    fn set_interrupted(&self) {
        self.interrupted.store(true, Ordering::Relaxed);
    }

    fn reset_interrupted(&self) {
        self.interrupted.store(false, Ordering::Relaxed);
    }
}

/// One live simulation engine instance.
pub trait Universe: Send {
    /// Caps the memory the engine may use, in megabytes.
    fn set_max_memory(&mut self, megabytes: i32);

    /// Budget last applied, if any.
    fn max_memory(&self) -> Option<i32>;

    fn set_poller(&mut self, poller: Arc<dyn Poller>);

    fn has_poller(&self) -> bool;
}

type CreateFn = dyn Fn() -> Option<Box<dyn Universe>> + Send + Sync;

/// Factory capability supplied by a backend when it registers.
#[derive(Clone)]
pub struct Creator(Arc<CreateFn>);

impl Creator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Option<Box<dyn Universe>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the backend's factory. `None` means the engine could not be built.
    #[must_use]
    pub fn create(&self) -> Option<Box<dyn Universe>> {
        (self.0)()
    }
}

impl fmt::Debug for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Creator(..)")
    }
}

/// Builds universes for registered algorithms.
pub struct UniverseFactory<'a> {
    registry: &'a Registry,
    poller: Arc<dyn Poller>,
}

impl<'a> UniverseFactory<'a> {
    pub fn new(registry: &'a Registry, poller: Arc<dyn Poller>) -> Self {
        Self { registry, poller }
    }

    /// Creates a universe for algorithm `algo`.
    ///
    /// A non-negative memory budget is applied once. With `allow_check` the
    /// universe is wired to the shared poller so the host can interrupt it.
    ///
    /// # Panics
    /// Panics if `algo` is not a registered index.
    pub fn create(&self, algo: usize, allow_check: bool) -> Result<Box<dyn Universe>> {
        let ad = self.registry.algo(algo);
        let creator = ad.creator.as_ref().ok_or_else(|| AlgoError::MissingCreator {
            index: algo,
            name: ad.name().to_string(),
        })?;

        let mut universe = creator.create().ok_or_else(|| {
            tracing::error!(algo = ad.name(), "Creator produced no universe");
            AlgoError::InstanceCreation {
                name: ad.name().to_string(),
            }
        })?;

        if ad.max_memory >= 0 {
            universe.set_max_memory(ad.max_memory);
        }
        if allow_check {
            universe.set_poller(Arc::clone(&self.poller));
        }

        tracing::debug!(
            algo = ad.name(),
            max_memory = ad.max_memory,
            allow_check,
            "Created universe"
        );
        Ok(universe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_poller() {
        let poller = InterruptPoller::new();
        assert!(!poller.poll());
        poller.set_interrupted();
        assert!(poller.poll());
        poller.reset_interrupted();
        assert!(!poller.is_interrupted());
        assert_eq!(poller.poll_count(), 2);
    }

    #[test]
    fn test_creator_none() {
        let creator = Creator::new(|| None);
        assert!(creator.create().is_none());
        assert_eq!(format!("{creator:?}"), "Creator(..)");
    }
}
