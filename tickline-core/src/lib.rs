//! Tickline core: deferred-callback scheduling
//!
//! A fixed-capacity [`jobs::JobTable`] holds callbacks armed to fire a
//! given number of ticks in the future. [`scheduler::TickScheduler`]
//! wraps the table for shared use between a periodic timer interrupt
//! and normal execution context, and keeps a monotonic tick counter
//! beside it.
//!
//! Everything runs in bounded time with no allocation; the only failure
//! mode is a full table, reported by a `false` return from `schedule`.
//!
//! # Usage
//!
//! ```ignore
//! static SCHEDULER: TickScheduler<DEFAULT_JOBS> = TickScheduler::new();
//!
//! // In the periodic timer interrupt handler:
//! SCHEDULER.on_tick();
//!
//! // From application code:
//! fn pump_off() { /* ... */ }
//! if !SCHEDULER.schedule(pump_off, 250) {
//!     // table full; retry later or drop
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod jobs;
pub mod scheduler;

// Re-export key types at crate root for convenience
pub use jobs::{JobFn, JobTable, DEFAULT_JOBS};
pub use scheduler::TickScheduler;
