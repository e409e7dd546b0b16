use image::{Rgba, RgbaImage};
use lifealgo_core::{AlgoData, Creator, Poller, Universe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Universe that records every call the factory makes on it.
#[derive(Default)]
pub struct RecordingUniverse {
    pub calls: Arc<CallLog>,
    max_memory: Option<i32>,
    poller: Option<Arc<dyn Poller>>,
}

#[derive(Debug, Default)]
pub struct CallLog {
    pub created: AtomicUsize,
    pub memory: Mutex<Vec<i32>>,
    pub pollers: AtomicUsize,
}

impl Universe for RecordingUniverse {
    fn set_max_memory(&mut self, megabytes: i32) {
        self.calls.memory.lock().unwrap().push(megabytes);
        self.max_memory = Some(megabytes);
    }

    fn max_memory(&self) -> Option<i32> {
        self.max_memory
    }

    fn set_poller(&mut self, poller: Arc<dyn Poller>) {
        self.calls.pollers.fetch_add(1, Ordering::SeqCst);
        self.poller = Some(poller);
    }

    fn has_poller(&self) -> bool {
        self.poller.is_some()
    }
}

/// Creator whose universes all report into `log`.
#[allow(dead_code)]
pub fn recording_creator(log: Arc<CallLog>) -> Creator {
    Creator::new(move || {
        log.created.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(RecordingUniverse {
            calls: Arc::clone(&log),
            ..Default::default()
        }) as Box<dyn Universe>)
    })
}

#[allow(dead_code)]
pub fn named(ad: &mut AlgoData, name: &str) {
    ad.set_name(name).set_creator(Creator::new(|| None));
}

/// Vertical strip of `count` square icons, each a different gray.
#[allow(dead_code)]
pub fn gray_strip(size: u32, count: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size * count, |_, y| {
        let shade = (30 + (y / size) * 20) as u8;
        Rgba([shade, shade, shade, 255])
    })
}
