use crate::hal::ports::{port_read, port_write};
use crate::io::speaker::SPEAKER_GATE;

use crate::machine::Machine;

const PIT_CHANNEL2: u16 = 0x42;
const PIT_COMMAND: u16 = 0x43;
const SYSTEM_CONTROL: u16 = 0x61;

/// Channel 2, lo/hi byte access, mode 3 (square wave), binary count.
const SQUARE_WAVE_CH2: u8 = 0b1011_0110;

/// Program timer channel 2 with the given divisor and open the speaker
/// gate. The 16-bit reload is the divisor with a zero high byte, so the
/// tone frequency is 1,193,182 / divisor.
///
/// Enable-only by design: there is no matching stop. Silencing the speaker
/// takes an external write that clears the same two gate bits.
pub fn start_tone(machine: &mut Machine, divisor: u8) {
    port_write(machine, PIT_COMMAND, SQUARE_WAVE_CH2);
    port_write(machine, PIT_CHANNEL2, divisor);
    port_write(machine, PIT_CHANNEL2, 0);

    // Read-modify-write: port 0x61 carries unrelated bits (refresh detect
    // among them), only the two gate bits may change.
    let current = port_read(machine, SYSTEM_CONTROL);
    port_write(machine, SYSTEM_CONTROL, current | SPEAKER_GATE);
}
