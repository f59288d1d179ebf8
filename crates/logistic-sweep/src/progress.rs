// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sweep Progress Reporter
// ─────────────────────────────────────────────────────────────────────
//! Counts finished configurations and logs at every 10% milestone.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

/// Thread-safe: the counter is atomic; the milestone check is guarded
/// by a `parking_lot::Mutex` so each decile is logged once.
pub struct ProgressReporter {
    total: usize,
    done: AtomicUsize,
    last_decile: Mutex<usize>,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
            last_decile: Mutex::new(0),
        }
    }

    /// Mark one configuration finished. Returns the new count.
    pub fn tick(&self) -> usize {
        let done = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        if self.total == 0 {
            return done;
        }
        let decile = (done * 10 / self.total).min(10);
        let mut last = self.last_decile.lock();
        if decile > *last {
            *last = decile;
            log::info!("sweep progress: {done}/{} configurations", self.total);
        }
        done
    }

    pub fn completed(&self) -> usize {
        self.done.load(Ordering::SeqCst)
    }

    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed() as f64 / self.total as f64
    }
}
