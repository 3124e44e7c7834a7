// BIOS Data Area (BDA) — offsets relative to segment 0x0040

pub const VIDEO_MODE: usize = 0x49;    // Current video mode
pub const VIDEO_COLS: usize = 0x4A;    // Screen columns (word)
pub const CURSOR_POS: usize = 0x50;    // Cursor positions array (8 pages x 2 bytes)
pub const ACTIVE_PAGE: usize = 0x62;   // Current display page
pub const TICK_COUNT: usize = 0x6C;    // Timer ticks since midnight (dword)
pub const TICK_OVERFLOW: usize = 0x70; // Midnight rollover flag
pub const VIDEO_ROWS: usize = 0x84;    // Text rows minus 1

/// The 256-byte BIOS data area, owned by the firmware services.
pub struct Bda {
    bytes: [u8; 256],
}

impl Bda {
    pub fn new() -> Self {
        Self { bytes: [0; 256] }
    }

    pub fn read_byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    pub fn write_byte(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
    }

    pub fn read_word(&self, offset: usize) -> u16 {
        self.bytes[offset] as u16 | ((self.bytes[offset + 1] as u16) << 8)
    }

    pub fn write_word(&mut self, offset: usize, value: u16) {
        self.bytes[offset] = value as u8;
        self.bytes[offset + 1] = (value >> 8) as u8;
    }
}
