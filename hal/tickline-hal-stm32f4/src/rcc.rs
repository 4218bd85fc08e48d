//! AHB1 clock gating
//!
//! I/O banks sit on AHB1; their register blocks read as zero until the
//! matching AHB1ENR bit is set.

use cortex_m::asm;
use tickline_hal::{Bank, ClockGate};

const RCC_BASE: usize = 0x4002_3800;
const AHB1ENR: usize = 0x30;

/// Reset and clock control handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rcc {
    base: usize,
}

impl Default for Rcc {
    fn default() -> Self {
        Self::new()
    }
}

impl Rcc {
    /// Handle to the RCC register block
    pub const fn new() -> Self {
        Self { base: RCC_BASE }
    }

    /// AHB1ENR enable bit for `bank`
    pub const fn enable_bit(bank: Bank) -> u32 {
        match bank {
            Bank::A => 1 << 0,
            Bank::B => 1 << 1,
            Bank::C => 1 << 2,
            Bank::D => 1 << 3,
            Bank::E => 1 << 4,
            Bank::F => 1 << 5,
            Bank::G => 1 << 6,
            Bank::H => 1 << 7,
            Bank::I => 1 << 8,
        }
    }
}

impl ClockGate for Rcc {
    fn enable(&mut self, bank: Bank) {
        let addr = (self.base + AHB1ENR) as *mut u32;
        // Read-modify-write so the other AHB1 peripherals keep their bits
        unsafe {
            let value = core::ptr::read_volatile(addr);
            core::ptr::write_volatile(addr, value | Self::enable_bit(bank));
        }
        // The clock must be live before the first bank register write
        asm::dsb();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_bits_are_bank_ordered() {
        assert_eq!(Rcc::enable_bit(Bank::A), 1 << 0);
        assert_eq!(Rcc::enable_bit(Bank::C), 1 << 2);
        assert_eq!(Rcc::enable_bit(Bank::I), 1 << 8);
    }

    #[test]
    fn test_enable_bits_are_distinct() {
        let banks = [
            Bank::A,
            Bank::B,
            Bank::C,
            Bank::D,
            Bank::E,
            Bank::F,
            Bank::G,
            Bank::H,
            Bank::I,
        ];
        let mut seen = 0u32;
        for bank in banks {
            let bit = Rcc::enable_bit(bank);
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
    }
}
