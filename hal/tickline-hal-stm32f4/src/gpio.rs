//! I/O bank register blocks
//!
//! Each bank is a 0x400-byte block on AHB1. Field encodings and the
//! block layout follow the STM32F4 reference manual (RM0090).

use cortex_m::asm;
use tickline_hal::{Bank, BankRegisters, Mode, OutputType, Pull, Speed};

/// Base address of bank A; consecutive banks follow at `BANK_STRIDE`
pub const BANK_A_BASE: usize = 0x4002_0000;
/// Address distance between consecutive bank blocks
pub const BANK_STRIDE: usize = 0x400;

// Register byte offsets within one bank block
const MODER: usize = 0x00;
const OTYPER: usize = 0x04;
const OSPEEDR: usize = 0x08;
const PUPDR: usize = 0x0C;
const IDR: usize = 0x10;
const ODR: usize = 0x14;
const BSRR: usize = 0x18;
const LCKR: usize = 0x1C;
const AFRL: usize = 0x20;
const AFRH: usize = 0x24;

/// LCKR key bit; the lock sequence toggles it around the line mask
const LCKR_KEY: u32 = 1 << 16;

/// Address of `bank`'s register block
pub const fn bank_base(bank: Bank) -> usize {
    BANK_A_BASE + bank.index() as usize * BANK_STRIDE
}

/// Two-bit MODER encoding
const fn mode_bits(mode: Mode) -> u32 {
    match mode {
        Mode::Input => 0b00,
        Mode::Output => 0b01,
        Mode::Alternate => 0b10,
        Mode::Analog => 0b11,
    }
}

const fn mode_from_bits(bits: u32) -> Mode {
    match bits & 0b11 {
        0b00 => Mode::Input,
        0b01 => Mode::Output,
        0b10 => Mode::Alternate,
        _ => Mode::Analog,
    }
}

/// Two-bit PUPDR encoding; 0b11 is reserved
const fn pull_bits(pull: Pull) -> u32 {
    match pull {
        Pull::None => 0b00,
        Pull::Up => 0b01,
        Pull::Down => 0b10,
    }
}

const fn pull_from_bits(bits: u32) -> Option<Pull> {
    match bits & 0b11 {
        0b00 => Some(Pull::None),
        0b01 => Some(Pull::Up),
        0b10 => Some(Pull::Down),
        _ => None,
    }
}

/// Two-bit OSPEEDR encoding
const fn speed_bits(speed: Speed) -> u32 {
    match speed {
        Speed::Low => 0b00,
        Speed::Medium => 0b01,
        Speed::High => 0b10,
        Speed::VeryHigh => 0b11,
    }
}

const fn speed_from_bits(bits: u32) -> Speed {
    match bits & 0b11 {
        0b00 => Speed::Low,
        0b01 => Speed::Medium,
        0b10 => Speed::High,
        _ => Speed::VeryHigh,
    }
}

/// Nibble shift within an alternate-function half-register
const fn alt_fn_shift(line: u8) -> usize {
    4 * (line as usize & 0x7)
}

/// Volatile handle to one bank's register block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BankRegs {
    base: usize,
}

impl BankRegs {
    /// Handle to `bank`'s register block
    pub const fn new(bank: Bank) -> Self {
        Self {
            base: bank_base(bank),
        }
    }

    // All access is volatile; addresses derive from the fixed memory map.
    fn read(&self, offset: usize) -> u32 {
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u32) }
    }

    fn write(&mut self, offset: usize, value: u32) {
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }

    fn update(&mut self, offset: usize, mask: u32, bits: u32) {
        let value = self.read(offset);
        self.write(offset, (value & !mask) | bits);
    }
}

impl BankRegisters for BankRegs {
    fn set_mode(&mut self, line: u8, mode: Mode) {
        let shift = 2 * line as usize;
        self.update(MODER, 0b11 << shift, mode_bits(mode) << shift);
    }

    fn mode(&self, line: u8) -> Mode {
        mode_from_bits(self.read(MODER) >> (2 * line as usize))
    }

    fn set_alt_fn_low(&mut self, line: u8, alt_fn: u8) {
        let shift = alt_fn_shift(line);
        self.update(AFRL, 0xF << shift, (alt_fn as u32) << shift);
    }

    fn alt_fn_low(&self, line: u8) -> u8 {
        ((self.read(AFRL) >> alt_fn_shift(line)) & 0xF) as u8
    }

    fn set_alt_fn_high(&mut self, line: u8, alt_fn: u8) {
        let shift = alt_fn_shift(line);
        self.update(AFRH, 0xF << shift, (alt_fn as u32) << shift);
    }

    fn alt_fn_high(&self, line: u8) -> u8 {
        ((self.read(AFRH) >> alt_fn_shift(line)) & 0xF) as u8
    }

    fn set_pull(&mut self, line: u8, pull: Pull) {
        let shift = 2 * line as usize;
        self.update(PUPDR, 0b11 << shift, pull_bits(pull) << shift);
    }

    fn pull(&self, line: u8) -> Option<Pull> {
        pull_from_bits(self.read(PUPDR) >> (2 * line as usize))
    }

    fn set_speed(&mut self, line: u8, speed: Speed) {
        let shift = 2 * line as usize;
        self.update(OSPEEDR, 0b11 << shift, speed_bits(speed) << shift);
    }

    fn speed(&self, line: u8) -> Speed {
        speed_from_bits(self.read(OSPEEDR) >> (2 * line as usize))
    }

    fn set_output_type(&mut self, line: u8, output_type: OutputType) {
        let bit = 1u32 << line;
        let value = match output_type {
            OutputType::PushPull => 0,
            OutputType::OpenDrain => bit,
        };
        self.update(OTYPER, bit, value);
    }

    fn output_type(&self, line: u8) -> OutputType {
        if self.read(OTYPER) & (1 << line) == 0 {
            OutputType::PushPull
        } else {
            OutputType::OpenDrain
        }
    }

    fn lock(&mut self, line: u8) {
        let mask = 1u32 << line;
        // Key sequence: key+mask, mask, key+mask, then one read. Any
        // deviation aborts the lock.
        self.write(LCKR, LCKR_KEY | mask);
        self.write(LCKR, mask);
        self.write(LCKR, LCKR_KEY | mask);
        let _ = self.read(LCKR);
    }

    fn is_locked(&self, line: u8) -> bool {
        self.read(LCKR) & (1 << line) != 0
    }

    fn barrier(&self) {
        asm::dsb();
    }

    fn set_output(&mut self, line: u8, high: bool) {
        // BSRR: low half sets, high half resets; one atomic write either way
        let bit = if high {
            1u32 << line
        } else {
            1u32 << (line as usize + 16)
        };
        self.write(BSRR, bit);
    }

    fn output(&self, line: u8) -> bool {
        self.read(ODR) & (1 << line) != 0
    }

    fn toggle_output(&mut self, line: u8) {
        // Set and reset through BSRR in one write, from a single ODR sample
        let mask = 1u32 << line;
        let odr = self.read(ODR);
        self.write(BSRR, ((odr & mask) << 16) | (!odr & mask));
    }

    fn input(&self, line: u8) -> bool {
        self.read(IDR) & (1 << line) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_bases_follow_the_memory_map() {
        assert_eq!(bank_base(Bank::A), 0x4002_0000);
        assert_eq!(bank_base(Bank::B), 0x4002_0400);
        assert_eq!(bank_base(Bank::E), 0x4002_1000);
        assert_eq!(bank_base(Bank::I), 0x4002_2000);
    }

    #[test]
    fn test_mode_encoding_round_trips() {
        for mode in [Mode::Input, Mode::Output, Mode::Alternate, Mode::Analog] {
            assert_eq!(mode_from_bits(mode_bits(mode)), mode);
        }
    }

    #[test]
    fn test_pull_encoding_and_reserved_pattern() {
        for pull in [Pull::None, Pull::Up, Pull::Down] {
            assert_eq!(pull_from_bits(pull_bits(pull)), Some(pull));
        }
        assert_eq!(pull_from_bits(0b11), None);
    }

    #[test]
    fn test_speed_encoding_round_trips() {
        for speed in [Speed::Low, Speed::Medium, Speed::High, Speed::VeryHigh] {
            assert_eq!(speed_from_bits(speed_bits(speed)), speed);
        }
    }

    #[test]
    fn test_alt_fn_shift_wraps_at_the_half_register() {
        assert_eq!(alt_fn_shift(0), 0);
        assert_eq!(alt_fn_shift(7), 28);
        // High-half lines land on the same nibbles of the other register
        assert_eq!(alt_fn_shift(8), 0);
        assert_eq!(alt_fn_shift(15), 28);
    }
}
