use crate::bios::bda;
use crate::machine::Machine;

/// INT 1Ah — Time of Day services
///
/// The tick counter itself lives behind the machine's tick source (the
/// timer IRQ keeps it current on real hardware); the read service mirrors
/// the sampled value into the BDA dword the way the real firmware does.
pub fn int1ah(machine: &mut Machine) {
    let ah = machine.registers.ax.high();
    match ah {
        // AH=00: Read tick count — CX:DX = ticks, AL = midnight flag
        0x00 => {
            let ticks = machine.clock_ticks();
            machine.bda.write_word(bda::TICK_COUNT, ticks as u16);
            machine.bda.write_word(bda::TICK_COUNT + 2, (ticks >> 16) as u16);

            machine.registers.cx.set((ticks >> 16) as u16);
            machine.registers.dx.set(ticks as u16);

            let midnight = machine.bda.read_byte(bda::TICK_OVERFLOW);
            machine.registers.ax.set_low(midnight);
            machine.bda.write_byte(bda::TICK_OVERFLOW, 0);
        }
        _ => log::warn!("[INT1Ah] unhandled function AH={:02X}", ah),
    }
}
