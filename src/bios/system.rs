use crate::machine::Machine;

/// INT 19h — Bootstrap loader reentry
///
/// On real firmware this hands control back to the boot path; here the
/// machine is flagged and the caller's run ends. Not an exit code — the
/// program has none — just the interrupt-driven termination the hardware
/// offers.
pub fn int19h(machine: &mut Machine) {
    machine.rebooted = true;
    log::info!("[BIOS] bootstrap reentry requested");
}
