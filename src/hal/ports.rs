use crate::machine::Machine;

/// Single-byte input from an I/O port. Unconditional; whatever the device
/// drives on the bus comes back unmodified.
#[inline]
pub fn port_read(machine: &mut Machine, port: u16) -> u8 {
    machine.port_in_byte(port)
}

/// Single-byte output to an I/O port. May alter arbitrary hardware state;
/// there is no status to check.
#[inline]
pub fn port_write(machine: &mut Machine, port: u16, value: u8) {
    machine.port_out_byte(port, value);
}
