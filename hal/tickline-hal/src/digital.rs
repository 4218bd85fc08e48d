//! Typed digital line wrappers
//!
//! [`OutputLine`] and [`InputLine`] pair a bank-register capability with
//! one [`LineConfig`], exposing polarity-adjusted helpers next to the raw
//! electrical levels. Both also implement the `embedded-hal` digital
//! traits (raw levels, infallible).
//!
//! Polarity follows the bias configuration: a pull-down line is
//! active-high, a pull-up or floating line is active-low. Analog and
//! alternate-function lines get no wrapper; configure those through
//! [`configure_line`] directly.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::init::configure_line;
use crate::line::{LineConfig, Pull};
use crate::regs::{BankRegisters, ClockGate};

const fn is_active_low(config: &LineConfig) -> bool {
    !matches!(config.pull(), Pull::Down)
}

/// Digital output line
///
/// Owns its bank-register capability. `on`/`off`/`is_enabled` speak the
/// logical state; `set_high`/`set_low`/`is_set_high` the electrical one.
pub struct OutputLine<B> {
    regs: B,
    config: LineConfig,
    /// If true, ON = line LOW
    active_low: bool,
}

impl<B: BankRegisters> OutputLine<B> {
    /// Wrap an output line
    pub fn new(regs: B, config: LineConfig) -> Self {
        let active_low = is_active_low(&config);
        Self {
            regs,
            config,
            active_low,
        }
    }

    /// Apply and verify the configuration, then freeze it until reset
    ///
    /// Returns `true` only if every field verified. Call once during
    /// start-up, before driving the line.
    pub fn init<C: ClockGate>(&mut self, clocks: &mut C) -> bool {
        configure_line(clocks, &mut self.regs, &self.config, true)
    }

    /// Drive the line to its logical ON level
    pub fn on(&mut self) {
        self.regs.set_output(self.config.line(), !self.active_low);
    }

    /// Drive the line to its logical OFF level
    pub fn off(&mut self) {
        self.regs.set_output(self.config.line(), self.active_low);
    }

    /// Invert the current electrical level
    pub fn toggle(&mut self) {
        self.regs.toggle_output(self.config.line());
    }

    /// Logical state, sampled from the input path
    pub fn is_enabled(&self) -> bool {
        self.regs.input(self.config.line()) != self.active_low
    }

    /// Drive the raw electrical level high
    pub fn set_high(&mut self) {
        self.regs.set_output(self.config.line(), true);
    }

    /// Drive the raw electrical level low
    pub fn set_low(&mut self) {
        self.regs.set_output(self.config.line(), false);
    }

    /// Raw driven level, from the output latch
    pub fn is_set_high(&self) -> bool {
        self.regs.output(self.config.line())
    }

    /// The descriptor this line was built from
    pub fn config(&self) -> &LineConfig {
        &self.config
    }
}

impl<B: BankRegisters> ErrorType for OutputLine<B> {
    type Error = Infallible;
}

impl<B: BankRegisters> OutputPin for OutputLine<B> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        OutputLine::set_low(self);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        OutputLine::set_high(self);
        Ok(())
    }
}

impl<B: BankRegisters> StatefulOutputPin for OutputLine<B> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(OutputLine::is_set_high(self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!OutputLine::is_set_high(self))
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        OutputLine::toggle(self);
        Ok(())
    }
}

/// Digital input line
pub struct InputLine<B> {
    regs: B,
    config: LineConfig,
    /// If true, enabled = line LOW
    active_low: bool,
}

impl<B: BankRegisters> InputLine<B> {
    /// Wrap an input line
    pub fn new(regs: B, config: LineConfig) -> Self {
        let active_low = is_active_low(&config);
        Self {
            regs,
            config,
            active_low,
        }
    }

    /// Apply and verify the configuration, then freeze it until reset
    pub fn init<C: ClockGate>(&mut self, clocks: &mut C) -> bool {
        configure_line(clocks, &mut self.regs, &self.config, true)
    }

    /// Logical state after polarity adjustment
    pub fn is_enabled(&self) -> bool {
        self.regs.input(self.config.line()) != self.active_low
    }

    /// Raw electrical level
    pub fn is_high(&self) -> bool {
        self.regs.input(self.config.line())
    }

    /// The descriptor this line was built from
    pub fn config(&self) -> &LineConfig {
        &self.config
    }
}

impl<B: BankRegisters> ErrorType for InputLine<B> {
    type Error = Infallible;
}

impl<B: BankRegisters> InputPin for InputLine<B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(InputLine::is_high(self))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!InputLine::is_high(self))
    }
}
