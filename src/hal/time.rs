use crate::bios;
use crate::machine::Machine;

/// Nominal BIOS tick rate, ~18.2 per second rounded down.
pub const TICKS_PER_SECOND: u16 = 18;

/// Read the low word of the tick-of-day counter (INT 1Ah AH=00h, DX).
pub fn current_ticks(machine: &mut Machine) -> u16 {
    machine.registers.ax.set(0x0000);
    bios::dispatch(machine, 0x1A);
    machine.registers.dx.word()
}

/// Busy-wait for one nominal second of ticks.
///
/// This is a spin loop, not a sleep: it holds the single thread of control
/// for the whole duration. The elapsed comparison must stay modular —
/// `wrapping_sub`, never `current >= start + 18` — so a counter wrap at the
/// day boundary doesn't stall the loop.
pub fn delay_one_second(machine: &mut Machine) {
    let start = current_ticks(machine);
    while current_ticks(machine).wrapping_sub(start) < TICKS_PER_SECOND {
        std::hint::spin_loop();
    }
}
