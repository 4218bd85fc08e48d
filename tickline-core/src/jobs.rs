//! Fixed-capacity deferred-callback table
//!
//! Each slot is either free or holds a countdown and a callback. One
//! [`advance`] call ages every pending slot by one tick and fires the
//! callbacks whose countdown just reached zero.
//!
//! [`advance`]: JobTable::advance

/// Deferred callback: a plain function, no captured state
pub type JobFn = fn();

/// Conventional table capacity, used by examples and tests
pub const DEFAULT_JOBS: usize = 5;

/// One table entry
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Unoccupied, eligible for reuse
    Free,
    /// Armed; fires on the tick `countdown` reaches zero
    Pending { countdown: u32, callback: JobFn },
}

/// Fixed-capacity table of pending jobs
///
/// Plain single-context container: no interior locking. Share one
/// between an interrupt handler and application code through
/// [`TickScheduler`](crate::scheduler::TickScheduler) instead.
#[derive(Debug)]
pub struct JobTable<const N: usize> {
    slots: [Slot; N],
}

impl<const N: usize> JobTable<N> {
    /// Empty table
    pub const fn new() -> Self {
        Self {
            slots: [Slot::Free; N],
        }
    }

    /// Claim the first free slot for `callback`, firing after `delay` ticks
    ///
    /// Returns `false` when every slot is occupied; the job is dropped
    /// and the caller decides whether to retry. A `delay` of zero claims
    /// a slot but never fires: only a nonzero countdown reaching zero
    /// fires, so the next [`advance`] discards the entry unrun.
    ///
    /// [`advance`]: Self::advance
    pub fn schedule(&mut self, callback: JobFn, delay: u32) -> bool {
        for slot in self.slots.iter_mut() {
            if matches!(slot, Slot::Free) {
                *slot = Slot::Pending {
                    countdown: delay,
                    callback,
                };
                return true;
            }
        }
        false
    }

    /// Age every pending job by one tick and fire those that come due
    ///
    /// Callbacks run synchronously, in slot order, after the whole table
    /// has been aged. A fired slot is free again before its callback
    /// runs, so a callback may reschedule immediately.
    pub fn advance(&mut self) {
        let due = self.sweep();
        for callback in due.into_iter().flatten() {
            callback();
        }
    }

    /// Decrement pass: frees expired slots and collects the callbacks
    /// that became due, in slot order. Bounded time, no allocation.
    pub(crate) fn sweep(&mut self) -> [Option<JobFn>; N] {
        let mut due = [None; N];
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Slot::Pending { countdown, callback } = *slot {
                if countdown == 0 {
                    // Zero-delay entry: discard without firing
                    *slot = Slot::Free;
                } else if countdown == 1 {
                    *slot = Slot::Free;
                    due[i] = Some(callback);
                } else {
                    *slot = Slot::Pending {
                        countdown: countdown - 1,
                        callback,
                    };
                }
            }
        }
        due
    }

    /// Number of occupied slots
    pub fn pending(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Pending { .. }))
            .count()
    }

    /// Whether no slot is free
    pub fn is_full(&self) -> bool {
        self.pending() == N
    }
}

impl<const N: usize> Default for JobTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
