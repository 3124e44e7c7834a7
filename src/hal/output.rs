use crate::bios;
use crate::hal::ports;
use crate::io::uart::COM1_BASE;
use crate::machine::Machine;

/// A one-character output capability. Side-effecting only: no status comes
/// back, so a caller cannot tell a disconnected serial line from a working
/// one.
pub trait CharSink {
    fn put(&mut self, c: u8);
}

/// Writes through the video teletype service (INT 10h AH=0Eh); the
/// firmware advances the cursor and scrolls by its own rules.
pub struct DisplaySink<'m> {
    machine: &'m mut Machine,
}

impl<'m> DisplaySink<'m> {
    pub fn new(machine: &'m mut Machine) -> Self {
        Self { machine }
    }
}

impl CharSink for DisplaySink<'_> {
    fn put(&mut self, c: u8) {
        self.machine.registers.ax.set_high(0x0E);
        self.machine.registers.ax.set_low(c);
        self.machine.registers.bx.set(0);
        bios::dispatch(self.machine, 0x10);
    }
}

/// Writes the raw byte to the COM1 data port. No handshake, framing, or
/// baud setup — the line is assumed preconfigured by hardware defaults.
pub struct SerialSink<'m> {
    machine: &'m mut Machine,
}

impl<'m> SerialSink<'m> {
    pub fn new(machine: &'m mut Machine) -> Self {
        Self { machine }
    }
}

impl CharSink for SerialSink<'_> {
    fn put(&mut self, c: u8) {
        ports::port_write(self.machine, COM1_BASE, c);
    }
}

/// ASCII hex digit for a nibble: 0-9 offset by 0x30, a-f offset by 0x57
/// (0x57 + 10 = 0x61 = 'a').
#[inline]
pub fn hex_digit(value: u8) -> u8 {
    if value > 9 {
        value + 0x57
    } else {
        value + 0x30
    }
}

/// Emit a CR/LF pair.
pub fn newline(sink: &mut impl CharSink) {
    sink.put(b'\r');
    sink.put(b'\n');
}

/// Emit `0x`, high nibble, low nibble, CR/LF. Exactly six sink calls.
pub fn print_hex8(sink: &mut impl CharSink, value: u8) {
    sink.put(b'0');
    sink.put(b'x');
    sink.put(hex_digit((value >> 4) & 0xF));
    sink.put(hex_digit(value & 0xF));
    newline(sink);
}

/// Byte-by-byte little-endian dump: four `print_hex8` lines, least
/// significant byte first. Not a single 32-bit literal.
pub fn print_hex32(sink: &mut impl CharSink, mut value: u32) {
    for _ in 0..4 {
        print_hex8(sink, value as u8);
        value >>= 8;
    }
}

/// Emit bytes up to the first NUL (the null-terminated contract) or the end
/// of the slice. Appends no line break of its own.
pub fn print_string(sink: &mut impl CharSink, text: &[u8]) {
    for &byte in text {
        if byte == 0 {
            break;
        }
        sink.put(byte);
    }
}
