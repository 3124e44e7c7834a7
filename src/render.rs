use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, ResetColor, SetBackgroundColor};
use crossterm::QueueableCommand;

use crate::machine::video::{Surface, VideoState, TEXT_ROWS};

const TARGET_COLS: u16 = 80;
const TARGET_ROWS: u16 = 25;

/// Paint the graphics surface into the terminal, one background-colored
/// cell per sampled pixel. The surface is downsampled to fit 80x25; colors
/// are passed straight through as ANSI palette indices, close enough for a
/// diagnostic gradient.
pub fn draw_surface(surface: &Surface) -> io::Result<()> {
    let step_x = surface.width.div_ceil(TARGET_COLS).max(1);
    let step_y = surface.height.div_ceil(TARGET_ROWS).max(1);
    let cols = surface.width / step_x;
    let rows = surface.height / step_y;

    let mut stdout = io::stdout();
    for row in 0..rows {
        stdout.queue(MoveTo(0, row))?;
        for col in 0..cols {
            let color = surface.pixel(col * step_x, row * step_y);
            stdout.queue(SetBackgroundColor(Color::AnsiValue(color)))?;
            write!(stdout, " ")?;
        }
        stdout.queue(ResetColor)?;
        writeln!(stdout)?;
    }
    stdout.flush()
}

/// Print the text page, skipping trailing blank rows.
pub fn draw_text(video: &VideoState) -> io::Result<()> {
    let mut stdout = io::stdout();
    let last = (0..TEXT_ROWS)
        .rev()
        .find(|&row| !video.row_text(row).is_empty());
    if let Some(last) = last {
        for row in 0..=last {
            writeln!(stdout, "{}", video.row_text(row))?;
        }
    }
    stdout.flush()
}
