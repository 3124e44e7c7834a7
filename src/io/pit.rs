use crate::io::bus::IoDevice;

/// PIT input oscillator frequency in Hz.
pub const OSC_HZ: u32 = 1_193_182;

#[derive(Clone, Copy, PartialEq)]
enum AccessMode {
    LoByte,
    HiByte,
    LoByteThenHiByte,
}

struct Channel {
    reload: u16,
    mode: u8,
    access: AccessMode,
    write_latch: bool, // true = waiting for hi byte on LoHi write
}

impl Channel {
    fn new() -> Self {
        Self {
            reload: 0,
            mode: 0,
            access: AccessMode::LoByteThenHiByte,
            write_latch: false,
        }
    }
}

/// 8253 programmable interval timer, write path only.
///
/// Channel 2 drives the speaker; the reload value programmed there sets the
/// square-wave frequency (OSC_HZ / reload). Nothing in this program reads
/// the counters back, so count-down and latch read-back are not modeled.
pub struct Pit {
    channels: [Channel; 3],
}

impl Pit {
    pub fn new() -> Self {
        Self {
            channels: [Channel::new(), Channel::new(), Channel::new()],
        }
    }

    pub fn channel_reload(&self, channel: usize) -> u16 {
        self.channels[channel].reload
    }

    pub fn channel_mode(&self, channel: usize) -> u8 {
        self.channels[channel].mode
    }
}

impl IoDevice for Pit {
    fn port_in_byte(&mut self, port: u16) -> u8 {
        let ch_idx = (port - 0x40) as usize;
        if ch_idx >= 3 {
            return 0xFF;
        }
        // No countdown model; reads see the reload value.
        self.channels[ch_idx].reload as u8
    }

    fn port_out_byte(&mut self, port: u16, value: u8) {
        if port == 0x43 {
            // Control word
            let ch_sel = (value >> 6) & 0x03;
            if ch_sel == 3 {
                return; // Read-back command, ignore
            }
            let ch = &mut self.channels[ch_sel as usize];
            let access = (value >> 4) & 0x03;
            let mode = (value >> 1) & 0x07;

            if access == 0 {
                log::trace!("[PIT] latch command on channel {}, ignored", ch_sel);
            } else {
                ch.access = match access {
                    1 => AccessMode::LoByte,
                    2 => AccessMode::HiByte,
                    3 => AccessMode::LoByteThenHiByte,
                    _ => unreachable!(),
                };
                ch.mode = mode;
                ch.write_latch = false;
            }
            return;
        }

        let ch_idx = (port - 0x40) as usize;
        if ch_idx >= 3 {
            return;
        }
        let ch = &mut self.channels[ch_idx];

        match ch.access {
            AccessMode::LoByte => {
                ch.reload = (ch.reload & 0xFF00) | value as u16;
            }
            AccessMode::HiByte => {
                ch.reload = (ch.reload & 0x00FF) | ((value as u16) << 8);
            }
            AccessMode::LoByteThenHiByte => {
                if !ch.write_latch {
                    ch.reload = (ch.reload & 0xFF00) | value as u16;
                    ch.write_latch = true;
                } else {
                    ch.reload = (ch.reload & 0x00FF) | ((value as u16) << 8);
                    ch.write_latch = false;
                    log::debug!(
                        "[PIT] channel {} reload {} mode {}",
                        ch_idx,
                        ch.reload,
                        ch.mode
                    );
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "8253 PIT"
    }
}
