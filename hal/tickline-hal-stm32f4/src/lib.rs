//! STM32F4 register access for Tickline
//!
//! Volatile MMIO implementations of the `tickline-hal` capability traits
//! for STM32F405/07/15/17-class parts: nine I/O banks (A..I) on AHB1,
//! clock-gated through RCC. Register addresses come from the fixed
//! memory map, so handles are plain `const`-constructible values.
//!
//! The `critical-section-single-core` feature forwards to `cortex-m`,
//! supplying a critical-section implementation for single-core
//! applications that share a scheduler with an interrupt handler.

#![no_std]

pub mod gpio;
pub mod rcc;

pub use gpio::{bank_base, BankRegs};
pub use rcc::Rcc;

// Re-export the trait crate so applications depend on one HAL name
pub use tickline_hal as hal;

use tickline_hal::{InputLine, LineConfig, OutputLine};

/// [`OutputLine`] bound to the register block of `config`'s bank
pub fn output_line(config: LineConfig) -> OutputLine<BankRegs> {
    OutputLine::new(BankRegs::new(config.bank()), config)
}

/// [`InputLine`] bound to the register block of `config`'s bank
pub fn input_line(config: LineConfig) -> InputLine<BankRegs> {
    InputLine::new(BankRegs::new(config.bank()), config)
}
