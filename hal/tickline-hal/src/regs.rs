//! Register capability traits
//!
//! Provides traits for one I/O bank's register block and for the clock
//! gating that feeds it. Chip crates implement them over volatile MMIO;
//! tests implement them over plain memory.

use crate::line::{Bank, Mode, OutputType, Pull, Speed};

/// One I/O bank's register block
///
/// Implementations handle the actual register manipulation for the
/// specific chip. Setters take the raw field value; getters read the
/// live register state so callers can verify a write landed.
///
/// The alternate function is split across two half-registers. `line`
/// selects the nibble within the addressed half, so the low methods
/// expect lines 0..=7 and the high methods lines 8..=15.
pub trait BankRegisters {
    /// Set the mode field of `line`
    fn set_mode(&mut self, line: u8, mode: Mode);

    /// Read the mode field of `line`
    fn mode(&self, line: u8) -> Mode;

    /// Set the alternate function of a line in the low half (0..=7)
    fn set_alt_fn_low(&mut self, line: u8, alt_fn: u8);

    /// Read the alternate function of a line in the low half (0..=7)
    fn alt_fn_low(&self, line: u8) -> u8;

    /// Set the alternate function of a line in the high half (8..=15)
    fn set_alt_fn_high(&mut self, line: u8, alt_fn: u8);

    /// Read the alternate function of a line in the high half (8..=15)
    fn alt_fn_high(&self, line: u8) -> u8;

    /// Set the bias resistor field of `line`
    fn set_pull(&mut self, line: u8, pull: Pull);

    /// Read the bias resistor field of `line`
    ///
    /// Returns `None` when the register holds the reserved encoding, so
    /// a corrupted field never verifies as any intended value.
    fn pull(&self, line: u8) -> Option<Pull>;

    /// Set the drive speed field of `line`
    fn set_speed(&mut self, line: u8, speed: Speed);

    /// Read the drive speed field of `line`
    fn speed(&self, line: u8) -> Speed;

    /// Set the output driver topology of `line`
    fn set_output_type(&mut self, line: u8, output_type: OutputType);

    /// Read the output driver topology of `line`
    fn output_type(&self, line: u8) -> OutputType;

    /// Freeze the configuration of `line` until the next reset
    fn lock(&mut self, line: u8);

    /// Whether the configuration of `line` is frozen
    fn is_locked(&self, line: u8) -> bool;

    /// Complete all outstanding register writes
    ///
    /// Called between a configuration write and its read-back so the
    /// comparison observes the settled value.
    fn barrier(&self);

    /// Drive the output latch of `line` to the given level
    fn set_output(&mut self, line: u8, high: bool);

    /// Read the output latch of `line`
    fn output(&self, line: u8) -> bool;

    /// Invert the output latch of `line`
    fn toggle_output(&mut self, line: u8);

    /// Sample the input path of `line`
    fn input(&self, line: u8) -> bool;
}

/// Clock gating for I/O banks
///
/// Enabling a bank's clock domain makes its register block accessible.
pub trait ClockGate {
    /// Enable the clock domain feeding `bank`
    ///
    /// Idempotent: repeated calls for the same bank are harmless, so
    /// callers enable unconditionally before every initialization.
    fn enable(&mut self, bank: Bank);
}
