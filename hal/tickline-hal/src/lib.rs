//! Tickline Hardware Abstraction Layer
//!
//! This crate defines the register capability traits implemented by
//! chip-specific HALs (STM32F4 today), the I/O line descriptor, and the
//! verified write-then-check initialization built on top of them. The
//! same start-up code runs against real registers or an in-memory fake.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application start-up / tickline-core   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tickline-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │         tickline-hal-stm32f4            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`regs::BankRegisters`] - typed access to one bank's per-line
//!   configuration fields, outputs, inputs and the configuration lock
//! - [`regs::ClockGate`] - idempotent clock-domain enable per bank
//!
//! # Initialization contract
//!
//! [`init::configure_line`] writes each field of a [`line::LineConfig`]
//! in a fixed order, issues a write barrier, reads the field back and
//! ANDs the comparison into an aggregate flag. The returned `bool` is
//! the only failure signal.

#![no_std]
#![deny(unsafe_code)]

pub mod digital;
pub mod init;
pub mod line;
pub mod regs;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export key items at crate root for convenience
pub use digital::{InputLine, OutputLine};
pub use init::configure_line;
pub use line::{parse_line_name, Bank, LineConfig, Mode, OutputType, Pull, Speed};
pub use regs::{BankRegisters, ClockGate};
