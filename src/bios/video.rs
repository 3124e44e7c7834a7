use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

use crate::bios::bda;
use crate::machine::video::{Surface, TEXT_COLS, TEXT_ROWS};
use crate::machine::Machine;

/// INT 10h — Video services
pub fn int10h(machine: &mut Machine) {
    let ah = machine.registers.ax.high();
    match ah {
        0x00 => set_video_mode(machine),
        0x0B => set_border(machine),
        0x0C => write_pixel(machine),
        0x0E => teletype_output(machine),
        0x0F => get_video_mode(machine),
        0x4F => vesa(machine),
        _ => log::warn!("[INT10h] unhandled function AH={:02X}", ah),
    }
}

/// VESA mode numbers this adapter knows, with their pixel geometry.
/// Color depth is not modeled beyond the one-byte color index the
/// write-pixel service carries.
#[derive(FromPrimitive, Clone, Copy, Debug)]
enum VesaMode {
    Vesa640x400 = 0x100,
    Vesa640x480 = 0x101,
    Vesa800x600 = 0x103,
    Vesa320x200 = 0x10D,
    Vesa800x600Direct = 0x115,
}

impl VesaMode {
    fn geometry(self) -> (u16, u16) {
        match self {
            VesaMode::Vesa640x400 => (640, 400),
            VesaMode::Vesa640x480 => (640, 480),
            VesaMode::Vesa800x600 | VesaMode::Vesa800x600Direct => (800, 600),
            VesaMode::Vesa320x200 => (320, 200),
        }
    }
}

fn set_video_mode(machine: &mut Machine) {
    let al = machine.registers.ax.low();
    let mode = al & 0x7F; // Bit 7 = don't clear screen
    let clear = al & 0x80 == 0;

    match mode {
        0x03 => {
            machine.video.surface = None;
            if clear {
                machine.video.clear_text();
            }
        }
        0x13 => {
            machine.video.surface = Some(Surface::new(320, 200));
        }
        other => {
            // Unsupported requests leave the display in the prior mode,
            // without any error indication to the caller.
            log::warn!("[INT10h] unsupported legacy mode {:02X}, ignored", other);
            return;
        }
    }

    machine.bda.write_byte(bda::VIDEO_MODE, mode);
    machine.bda.write_word(bda::VIDEO_COLS, TEXT_COLS as u16);
    machine.bda.write_byte(bda::VIDEO_ROWS, TEXT_ROWS as u8 - 1);
    machine.bda.write_byte(bda::ACTIVE_PAGE, 0);

    // Reset all cursor positions
    for i in 0..16 {
        machine.bda.write_byte(bda::CURSOR_POS + i, 0);
    }
    log::debug!("[INT10h] set mode {:02X}", mode);
}

/// AH=4Fh — VESA BIOS extensions; only AL=02h (set mode) is implemented.
/// Returns the VBE status in AX: 004Fh supported, 014Fh failed.
fn vesa(machine: &mut Machine) {
    let al = machine.registers.ax.low();
    if al != 0x02 {
        log::warn!("[INT10h] unhandled VBE function AL={:02X}", al);
        machine.registers.ax.set(0x014F);
        return;
    }

    // Bits 14 (linear framebuffer) and 15 (don't clear) select how the
    // mode is entered, not which mode; mask them off for the lookup.
    let bx = machine.registers.bx.word();
    let mode = bx & 0x01FF;

    match VesaMode::from_u16(mode) {
        Some(vesa_mode) => {
            let (width, height) = vesa_mode.geometry();
            machine.video.surface = Some(Surface::new(width, height));
            machine.bda.write_byte(bda::VIDEO_MODE, mode as u8);
            machine.registers.ax.set(0x004F);
            log::debug!("[INT10h] VBE set mode {:03X} ({}x{})", mode, width, height);
        }
        None => {
            log::warn!("[INT10h] VBE mode {:03X} not supported, ignored", mode);
            machine.registers.ax.set(0x014F);
        }
    }
}

/// AH=0Bh BH=00h — set background/border color from BL.
fn set_border(machine: &mut Machine) {
    let bh = machine.registers.bx.high();
    let bl = machine.registers.bx.low();
    if bh == 0x00 {
        machine.video.border = bl;
        log::debug!("[INT10h] border color {:02X}", bl);
    } else {
        // BH=01h selects the CGA palette id, not rendered here
        log::debug!("[INT10h] palette select {:02X} ignored", bl);
    }
}

/// AH=0Ch — write pixel. CX=x, DX=y, AL=color; the display page in BH is
/// accepted but only page 0 exists. Coordinates outside the active surface
/// are dropped, which is as firmware-specific as the real thing.
fn write_pixel(machine: &mut Machine) {
    let color = machine.registers.ax.low();
    let x = machine.registers.cx.word();
    let y = machine.registers.dx.word();

    #[cfg(test)]
    machine.video.plot_log.push((x, y, color));

    match machine.video.surface {
        Some(ref mut surface) if x < surface.width && y < surface.height => {
            surface.set_pixel(x, y, color);
        }
        Some(_) => log::trace!("[INT10h] pixel ({}, {}) outside surface", x, y),
        None => log::trace!("[INT10h] write pixel with no graphics surface"),
    }
}

/// AH=0Eh — teletype output: print AL at the cursor, advance, honoring
/// CR/LF/backspace and scrolling at the bottom of the page.
fn teletype_output(machine: &mut Machine) {
    let ch = machine.registers.ax.low();
    let mut col = machine.bda.read_byte(bda::CURSOR_POS);
    let mut row = machine.bda.read_byte(bda::CURSOR_POS + 1);

    match ch {
        0x0D => {
            // Carriage return
            col = 0;
        }
        0x0A => {
            // Line feed
            row += 1;
        }
        0x08 => {
            // Backspace
            if col > 0 {
                col -= 1;
            }
        }
        0x07 => {
            // Bell — ignore
        }
        _ => {
            machine.video.put_char(col, row, ch);
            col += 1;
        }
    }

    // Handle line wrap
    if col >= TEXT_COLS as u8 {
        col = 0;
        row += 1;
    }

    // Handle scrolling
    if row >= TEXT_ROWS as u8 {
        machine.video.scroll_up();
        row = TEXT_ROWS as u8 - 1;
    }

    machine.bda.write_byte(bda::CURSOR_POS, col);
    machine.bda.write_byte(bda::CURSOR_POS + 1, row);
}

/// AH=0Fh — get current mode: AL=mode, AH=columns, BH=active page.
fn get_video_mode(machine: &mut Machine) {
    let mode = machine.bda.read_byte(bda::VIDEO_MODE);
    let cols = machine.bda.read_word(bda::VIDEO_COLS);
    let page = machine.bda.read_byte(bda::ACTIVE_PAGE);
    machine.registers.ax.set_low(mode);
    machine.registers.ax.set_high(cols as u8);
    machine.registers.bx.set_high(page);
}
