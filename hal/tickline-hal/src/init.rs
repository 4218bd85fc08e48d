//! Verified line initialization
//!
//! Applies a [`LineConfig`] to hardware one field at a time: write,
//! barrier, read back, compare. The aggregate comparison result is the
//! only failure signal.

use crate::line::LineConfig;
use crate::regs::{BankRegisters, ClockGate};

/// Apply `config` and verify every field by reading it back
///
/// The bank's clock domain is enabled first. Fields are then written in
/// a fixed order: mode, alternate function, pull, speed, output type.
/// Each write is followed by a barrier and a read-back whose comparison
/// is ANDed into the result. Every field is written and checked even
/// after an earlier mismatch, so one stuck field does not leave later
/// fields unconfigured.
///
/// With `lock` set, the configuration is frozen after the last field and
/// the lock indicator is verified as well. A locked line cannot be
/// reconfigured until the next reset.
///
/// Returns `true` only if every read-back matched the requested value.
/// There is no rollback and no retry; callers wanting per-field detail
/// re-read the fields through [`BankRegisters`] themselves.
///
/// ```ignore
/// const LED: LineConfig = LineConfig::new(
///     Bank::A, 5, Mode::Output, 0, Speed::Low, Pull::None, OutputType::PushPull,
/// );
///
/// let mut rcc = Rcc::new();
/// let mut bank = BankRegs::new(LED.bank());
/// if !configure_line(&mut rcc, &mut bank, &LED, true) {
///     // verification mismatch: halt or run degraded, per application policy
/// }
/// ```
pub fn configure_line<C, B>(clocks: &mut C, regs: &mut B, config: &LineConfig, lock: bool) -> bool
where
    C: ClockGate,
    B: BankRegisters,
{
    clocks.enable(config.bank());

    let line = config.line();
    let mut ok = true;

    regs.set_mode(line, config.mode());
    regs.barrier();
    ok &= regs.mode(line) == config.mode();

    // The alternate function lives in two half-registers; the line index
    // selects which one.
    if line < 8 {
        regs.set_alt_fn_low(line, config.alt_fn());
        regs.barrier();
        ok &= regs.alt_fn_low(line) == config.alt_fn();
    } else {
        regs.set_alt_fn_high(line, config.alt_fn());
        regs.barrier();
        ok &= regs.alt_fn_high(line) == config.alt_fn();
    }

    regs.set_pull(line, config.pull());
    regs.barrier();
    ok &= regs.pull(line) == Some(config.pull());

    regs.set_speed(line, config.speed());
    regs.barrier();
    ok &= regs.speed(line) == config.speed();

    regs.set_output_type(line, config.output_type());
    regs.barrier();
    ok &= regs.output_type(line) == config.output_type();

    if lock {
        regs.lock(line);
        regs.barrier();
        ok &= regs.is_locked(line);
    }

    ok
}
