use crate::bios;
use crate::machine::Machine;

/// Color rule for `fill_rect`: a diagnostic gradient keyed to position,
/// not a solid fill.
#[derive(Clone, Copy, Debug)]
pub enum FillPattern {
    /// Color each pixel with its column index (truncated to a byte).
    ColumnIndex,
    /// Color each pixel with its row index.
    RowIndex,
}

/// Query the active video mode (INT 10h AH=0Fh, AL).
pub fn query_mode(machine: &mut Machine) -> u8 {
    machine.registers.ax.set_high(0x0F);
    bios::dispatch(machine, 0x10);
    machine.registers.ax.low()
}

/// Select a video mode by number through the VESA set-mode service
/// (INT 10h AX=4F02h, BX=mode), used for legacy and VESA numbers alike.
/// Bit 14 requests a linear framebuffer. Unsupported modes leave the
/// display as it was; no status is checked here.
pub fn set_mode(machine: &mut Machine, mode: u16) {
    machine.registers.ax.set(0x4F02);
    machine.registers.bx.set(mode);
    bios::dispatch(machine, 0x10);
}

/// Set the background/border color (INT 10h AH=0Bh BH=00h).
pub fn set_background(machine: &mut Machine, color: u8) {
    machine.registers.ax.set(0x0B00);
    machine.registers.bx.set(color as u16);
    bios::dispatch(machine, 0x10);
}

/// Plot one pixel (INT 10h AH=0Ch), display page fixed at 0. Coordinates
/// are handed to the firmware unchecked; out-of-range behavior is the
/// firmware's business.
pub fn plot_pixel(machine: &mut Machine, x: u16, y: u16, color: u8) {
    machine.registers.ax.set_high(0x0C);
    machine.registers.ax.set_low(color);
    machine.registers.bx.set(0);
    machine.registers.cx.set(x);
    machine.registers.dx.set(y);
    bios::dispatch(machine, 0x10);
}

/// Fill the half-open rectangle [x0, x0+width) x [y0, y0+height), one
/// write-pixel call per pixel.
///
/// Columns are visited in ascending order and, within each column, rows in
/// ascending order. The loop order and the position-keyed color rule are
/// part of the contract: they decide which pixels exist if the fill is cut
/// short, and they produce the diagnostic gradient this exists to show.
pub fn fill_rect(
    machine: &mut Machine,
    x0: u16,
    y0: u16,
    width: u16,
    height: u16,
    pattern: FillPattern,
) {
    let x1 = x0 + width;
    let y1 = y0 + height;
    for x in x0..x1 {
        for y in y0..y1 {
            let color = match pattern {
                FillPattern::ColumnIndex => x as u8,
                FillPattern::RowIndex => y as u8,
            };
            plot_pixel(machine, x, y, color);
        }
    }
}
