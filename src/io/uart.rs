use crate::io::bus::IoDevice;

/// COM1 base port. The transmit data register lives at the base address.
pub const COM1_BASE: u16 = 0x3F8;

/// Line status register offset; bit 5 = transmit holding register empty.
const LSR_OFFSET: u16 = 5;
const LSR_IDLE: u8 = 0x60;

/// 8250-style UART with firmware-default framing.
///
/// No baud or line configuration is modeled; bytes written to the data port
/// are latched into a transcript and the line status register always
/// reports the transmitter empty, so a sender needs no handshake. A
/// disconnected receiver is unobservable, matching the real wire.
pub struct Uart {
    transmitted: Vec<u8>,
}

impl Uart {
    pub fn new() -> Self {
        Self {
            transmitted: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[u8] {
        &self.transmitted
    }
}

impl IoDevice for Uart {
    fn port_in_byte(&mut self, port: u16) -> u8 {
        match port - COM1_BASE {
            LSR_OFFSET => LSR_IDLE,
            _ => 0xFF,
        }
    }

    fn port_out_byte(&mut self, port: u16, value: u8) {
        if port == COM1_BASE {
            log::trace!("[COM1] tx {:02X}", value);
            self.transmitted.push(value);
        }
        // Writes to the divisor/control registers are accepted and dropped;
        // the line runs at hardware defaults.
    }

    fn name(&self) -> &'static str {
        "COM1 UART"
    }
}
