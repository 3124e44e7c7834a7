pub mod bda;
pub mod init;
pub mod system;
pub mod timer;
pub mod video;

#[cfg(test)]
mod tests;

use crate::machine::Machine;

/// Issue a software interrupt against the firmware.
///
/// Register arguments and results travel through `machine.registers`,
/// each service defining its own layout — there is no generic register
/// marshalling beyond this dispatch.
pub fn dispatch(machine: &mut Machine, vector: u8) {
    match vector {
        0x10 => video::int10h(machine),
        0x19 => system::int19h(machine),
        0x1A => timer::int1ah(machine),
        other => log::warn!("[BIOS] unhandled interrupt vector {:02X}h", other),
    }
}
