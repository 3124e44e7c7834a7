//! The hardware abstraction layer: the primitives a real-mode program has
//! before any operating system exists. Each BIOS service is a distinct
//! typed function that encodes its exact register contract and issues the
//! interrupt — getting a register wrong produces silently wrong behavior,
//! not an error, so there is no generic "call interrupt N" API to get it
//! wrong through.
//!
//! Nothing here returns a `Result`: firmware calls are assumed to succeed
//! or to fail unobservably, exactly as on the metal.

pub mod output;
pub mod ports;
pub mod sound;
pub mod time;
pub mod video;

#[cfg(test)]
mod tests;

use crate::bios;
use crate::machine::Machine;

/// Reenter the bootstrap loader (INT 19h). The only way out.
pub fn reboot(machine: &mut Machine) {
    bios::dispatch(machine, 0x19);
}
