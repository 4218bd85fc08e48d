//! I/O line description
//!
//! A [`LineConfig`] captures the complete electrical configuration of one
//! I/O line. Descriptors are typically `const` values, so the range checks
//! in the constructor fail the build rather than the board.

/// I/O bank identifier
///
/// One bank groups sixteen lines behind a shared register block. The
/// discriminant doubles as the bank's position in the chip's register map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bank {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl Bank {
    /// Position within the register map (A = 0, B = 1, ...)
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Line mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// High-impedance digital input
    Input,
    /// Digital output driven from the output latch
    Output,
    /// Routed to a peripheral selected by the alternate function
    Alternate,
    /// Analog, digital input path disconnected
    Analog,
}

/// Passive bias resistor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Floating, no bias
    None,
    /// Pull-up to the supply rail
    Up,
    /// Pull-down to ground
    Down,
}

/// Output driver slew-rate class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Output driver topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputType {
    /// Drives both levels
    PushPull,
    /// Drives low only, high is released to the bias resistors
    OpenDrain,
}

/// Electrical configuration of one I/O line
///
/// Fully specified at construction and never mutated. Fields are private
/// so the constructor's range checks cannot be bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineConfig {
    bank: Bank,
    line: u8,
    mode: Mode,
    alt_fn: u8,
    speed: Speed,
    pull: Pull,
    output_type: OutputType,
}

impl LineConfig {
    /// Describe one I/O line
    ///
    /// # Arguments
    /// - `line`: line index within the bank, 0..=15
    /// - `alt_fn`: alternate function selector, 0..=15; applied and
    ///   verified regardless of `mode`
    ///
    /// Panics on an out-of-range `line` or `alt_fn`; for `const`
    /// descriptors this is a compile error.
    pub const fn new(
        bank: Bank,
        line: u8,
        mode: Mode,
        alt_fn: u8,
        speed: Speed,
        pull: Pull,
        output_type: OutputType,
    ) -> Self {
        assert!(line < 16, "line index out of range");
        assert!(alt_fn < 16, "alternate function out of range");
        Self {
            bank,
            line,
            mode,
            alt_fn,
            speed,
            pull,
            output_type,
        }
    }

    /// Bank this line belongs to
    pub const fn bank(&self) -> Bank {
        self.bank
    }

    /// Line index within the bank
    pub const fn line(&self) -> u8 {
        self.line
    }

    /// Line mode
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Alternate function selector
    pub const fn alt_fn(&self) -> u8 {
        self.alt_fn
    }

    /// Drive speed class
    pub const fn speed(&self) -> Speed {
        self.speed
    }

    /// Bias resistor configuration
    pub const fn pull(&self) -> Pull {
        self.pull
    }

    /// Output driver topology
    pub const fn output_type(&self) -> OutputType {
        self.output_type
    }
}

/// Parse a line name from config
///
/// Supports formats:
/// - "PA0" -> (Bank::A, 0, false)
/// - "!PB1" -> (Bank::B, 1, true/inverted)
pub fn parse_line_name(s: &str) -> Option<(Bank, u8, bool)> {
    let s = s.trim();

    let (s, inverted) = if s.starts_with('!') {
        (&s[1..], true)
    } else {
        (s, false)
    };

    if !s.starts_with('P') || s.len() < 3 {
        return None;
    }

    let bank = match s.chars().nth(1)? {
        'A' => Bank::A,
        'B' => Bank::B,
        'C' => Bank::C,
        'D' => Bank::D,
        'E' => Bank::E,
        'F' => Bank::F,
        'G' => Bank::G,
        'H' => Bank::H,
        'I' => Bank::I,
        _ => return None,
    };

    let line: u8 = s[2..].parse().ok()?;
    if line > 15 {
        return None;
    }

    Some((bank, line, inverted))
}
