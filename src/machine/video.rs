pub const TEXT_COLS: usize = 80;
pub const TEXT_ROWS: usize = 25;

/// Pixel-addressable surface backing the active graphics mode.
/// One byte per pixel; the color's meaning (palette index or a truncated
/// direct color) is whatever the mode says it is, this layer doesn't care.
pub struct Surface {
    pub width: u16,
    pub height: u16,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    #[inline]
    pub fn pixel(&self, x: u16, y: u16) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Display adapter state owned by the firmware: the 80x25 text page plus
/// the graphics surface of the active pixel mode, if any.
pub struct VideoState {
    text: [u8; TEXT_COLS * TEXT_ROWS],
    pub border: u8,
    pub surface: Option<Surface>,

    /// Write-pixel calls in issue order, for the test harness.
    #[cfg(test)]
    pub plot_log: Vec<(u16, u16, u8)>,
}

impl VideoState {
    pub fn new() -> Self {
        Self {
            text: [b' '; TEXT_COLS * TEXT_ROWS],
            border: 0,
            surface: None,
            #[cfg(test)]
            plot_log: Vec::new(),
        }
    }

    pub fn clear_text(&mut self) {
        self.text = [b' '; TEXT_COLS * TEXT_ROWS];
    }

    pub fn put_char(&mut self, col: u8, row: u8, ch: u8) {
        self.text[row as usize * TEXT_COLS + col as usize] = ch;
    }

    pub fn char_at(&self, col: u8, row: u8) -> u8 {
        self.text[row as usize * TEXT_COLS + col as usize]
    }

    /// Scroll the text page up one line, blanking the bottom row.
    pub fn scroll_up(&mut self) {
        self.text.copy_within(TEXT_COLS.., 0);
        let last = (TEXT_ROWS - 1) * TEXT_COLS;
        self.text[last..].fill(b' ');
    }

    /// One text row as a trimmed string, for rendering and assertions.
    pub fn row_text(&self, row: usize) -> String {
        let line = &self.text[row * TEXT_COLS..(row + 1) * TEXT_COLS];
        String::from_utf8_lossy(line).trim_end().to_string()
    }
}
