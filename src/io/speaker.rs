use crate::io::bus::IoDevice;

/// System Control Port B (0x61).
///
/// Bits 0-1 gate the PIT channel 2 output onto the speaker; both must be
/// set for a tone to be heard. On a real PC/AT bit 4 toggles with each DRAM
/// refresh cycle (~15us), so reads never return a stable value — callers
/// doing a read-modify-write must mask the bits they care about.
pub struct SystemControl {
    value: u8,
    toggle: bool,
}

/// Gate bits: timer 2 gate (bit 0) + speaker data (bit 1).
pub const SPEAKER_GATE: u8 = 0b11;

impl SystemControl {
    pub fn new() -> Self {
        Self {
            value: 0,
            toggle: false,
        }
    }

    pub fn speaker_enabled(&self) -> bool {
        self.value & SPEAKER_GATE == SPEAKER_GATE
    }
}

impl IoDevice for SystemControl {
    fn port_in_byte(&mut self, _port: u16) -> u8 {
        // Toggle bit 4 on every read (refresh detect)
        self.toggle = !self.toggle;
        if self.toggle {
            self.value | 0x10
        } else {
            self.value & !0x10
        }
    }

    fn port_out_byte(&mut self, _port: u16, value: u8) {
        // Only store bits 0-1 (timer 2 gate, speaker data)
        self.value = value & SPEAKER_GATE;
        if self.speaker_enabled() {
            log::debug!("[PORT61] speaker gate enabled");
        }
    }

    fn name(&self) -> &'static str {
        "System Control Port B"
    }
}
