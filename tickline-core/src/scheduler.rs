//! Interrupt-safe tick driver
//!
//! Wraps a [`JobTable`] for shared use between the periodic timer
//! interrupt and normal execution context, and keeps the monotonic tick
//! counter beside it. All interior access goes through a critical
//! section, so the interrupt can never observe a half-written slot.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use critical_section::Mutex;

use crate::jobs::{JobFn, JobTable};

/// Interrupt-safe scheduler
///
/// `const`-constructible so it can live in a `static` shared between the
/// timer interrupt handler and application code:
///
/// ```ignore
/// static SCHEDULER: TickScheduler<DEFAULT_JOBS> = TickScheduler::new();
/// ```
pub struct TickScheduler<const N: usize> {
    jobs: Mutex<RefCell<JobTable<N>>>,
    ticks: AtomicU32,
}

impl<const N: usize> TickScheduler<N> {
    /// Empty scheduler with the tick counter at zero
    pub const fn new() -> Self {
        Self {
            jobs: Mutex::new(RefCell::new(JobTable::new())),
            ticks: AtomicU32::new(0),
        }
    }

    /// Claim a slot for `callback`, firing after `delay` ticks
    ///
    /// Returns `false` when the table is full. The slot search and write
    /// happen inside one critical section, so a tick interrupt sees the
    /// countdown and callback together or not at all.
    pub fn schedule(&self, callback: JobFn, delay: u32) -> bool {
        critical_section::with(|cs| self.jobs.borrow_ref_mut(cs).schedule(callback, delay))
    }

    /// Age every pending job by one tick and fire those that come due
    ///
    /// The table sweep runs inside a critical section; the callbacks run
    /// after it is released, in slot order, still synchronously within
    /// this call. A callback may therefore [`schedule`] on this same
    /// scheduler without deadlock.
    ///
    /// [`schedule`]: Self::schedule
    pub fn advance(&self) {
        let due = critical_section::with(|cs| self.jobs.borrow_ref_mut(cs).sweep());
        for callback in due.into_iter().flatten() {
            callback();
        }
    }

    /// Bump the tick counter by one, wrapping silently on overflow
    ///
    /// Single-writer: only the periodic timer context calls this. A
    /// load/store pair keeps it portable to cores without atomic
    /// read-modify-write.
    pub fn tick_increment(&self) {
        let ticks = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(ticks.wrapping_add(1), Ordering::Relaxed);
    }

    /// Current tick count
    ///
    /// Coarse timestamping only; the job table does not consume it.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Timer interrupt entry point: one tick increment, one advance
    pub fn on_tick(&self) {
        self.tick_increment();
        self.advance();
    }

    /// Number of occupied slots
    pub fn pending(&self) -> usize {
        critical_section::with(|cs| self.jobs.borrow_ref(cs).pending())
    }
}

impl<const N: usize> Default for TickScheduler<N> {
    fn default() -> Self {
        Self::new()
    }
}
