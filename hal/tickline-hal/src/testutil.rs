//! In-memory fakes for exercising the register traits in host tests

use core::cell::Cell;

use crate::line::{Bank, Mode, OutputType, Pull, Speed};
use crate::regs::{BankRegisters, ClockGate};

/// Configuration field targeted by a recorded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Mode,
    AltFnLow,
    AltFnHigh,
    Pull,
    Speed,
    OutputType,
    Lock,
}

/// In-memory bank registers
///
/// Records the order of configuration writes and the number of barriers.
/// One field can be marked stuck, in which case writes to it are recorded
/// but dropped, simulating hardware that refuses the value.
pub(crate) struct FakeBank {
    pub modes: [Mode; 16],
    pub alt_low: [u8; 8],
    pub alt_high: [u8; 8],
    pub pulls: [Pull; 16],
    pub speeds: [Speed; 16],
    pub output_types: [OutputType; 16],
    pub locked: [bool; 16],
    pub outputs: [bool; 16],
    pub inputs: [bool; 16],
    pub barriers: Cell<usize>,
    pub writes: [Option<Field>; 8],
    pub write_count: usize,
    pub stuck: Option<Field>,
    /// Make every pull read-back return the reserved encoding
    pub reserved_pull: bool,
}

impl FakeBank {
    pub fn new() -> Self {
        Self {
            modes: [Mode::Input; 16],
            alt_low: [0; 8],
            alt_high: [0; 8],
            pulls: [Pull::None; 16],
            speeds: [Speed::Low; 16],
            output_types: [OutputType::PushPull; 16],
            locked: [false; 16],
            outputs: [false; 16],
            inputs: [false; 16],
            barriers: Cell::new(0),
            writes: [None; 8],
            write_count: 0,
            stuck: None,
            reserved_pull: false,
        }
    }

    fn record(&mut self, field: Field) -> bool {
        if self.write_count < self.writes.len() {
            self.writes[self.write_count] = Some(field);
            self.write_count += 1;
        }
        self.stuck != Some(field)
    }

    /// Fields written so far, in order
    pub fn written(&self) -> &[Option<Field>] {
        &self.writes[..self.write_count]
    }
}

impl BankRegisters for FakeBank {
    fn set_mode(&mut self, line: u8, mode: Mode) {
        if self.record(Field::Mode) {
            self.modes[line as usize] = mode;
        }
    }

    fn mode(&self, line: u8) -> Mode {
        self.modes[line as usize]
    }

    fn set_alt_fn_low(&mut self, line: u8, alt_fn: u8) {
        if self.record(Field::AltFnLow) {
            self.alt_low[line as usize] = alt_fn;
        }
    }

    fn alt_fn_low(&self, line: u8) -> u8 {
        self.alt_low[line as usize]
    }

    fn set_alt_fn_high(&mut self, line: u8, alt_fn: u8) {
        if self.record(Field::AltFnHigh) {
            self.alt_high[line as usize - 8] = alt_fn;
        }
    }

    fn alt_fn_high(&self, line: u8) -> u8 {
        self.alt_high[line as usize - 8]
    }

    fn set_pull(&mut self, line: u8, pull: Pull) {
        if self.record(Field::Pull) {
            self.pulls[line as usize] = pull;
        }
    }

    fn pull(&self, line: u8) -> Option<Pull> {
        if self.reserved_pull {
            None
        } else {
            Some(self.pulls[line as usize])
        }
    }

    fn set_speed(&mut self, line: u8, speed: Speed) {
        if self.record(Field::Speed) {
            self.speeds[line as usize] = speed;
        }
    }

    fn speed(&self, line: u8) -> Speed {
        self.speeds[line as usize]
    }

    fn set_output_type(&mut self, line: u8, output_type: OutputType) {
        if self.record(Field::OutputType) {
            self.output_types[line as usize] = output_type;
        }
    }

    fn output_type(&self, line: u8) -> OutputType {
        self.output_types[line as usize]
    }

    fn lock(&mut self, line: u8) {
        if self.record(Field::Lock) {
            self.locked[line as usize] = true;
        }
    }

    fn is_locked(&self, line: u8) -> bool {
        self.locked[line as usize]
    }

    fn barrier(&self) {
        self.barriers.set(self.barriers.get() + 1);
    }

    fn set_output(&mut self, line: u8, high: bool) {
        self.outputs[line as usize] = high;
        // The input path reads back the driven level, as a push-pull
        // output does on real hardware.
        self.inputs[line as usize] = high;
    }

    fn output(&self, line: u8) -> bool {
        self.outputs[line as usize]
    }

    fn toggle_output(&mut self, line: u8) {
        let high = !self.outputs[line as usize];
        self.set_output(line, high);
    }

    fn input(&self, line: u8) -> bool {
        self.inputs[line as usize]
    }
}

/// Clock gate that counts enables per bank
pub(crate) struct FakeClock {
    pub enables: [usize; 9],
}

impl FakeClock {
    pub fn new() -> Self {
        Self { enables: [0; 9] }
    }
}

impl ClockGate for FakeClock {
    fn enable(&mut self, bank: Bank) {
        self.enables[bank.index() as usize] += 1;
    }
}
