use crate::bios::bda;
use crate::machine::video::{TEXT_COLS, TEXT_ROWS};
use crate::machine::Machine;

/// Power-on defaults — the single initialization point for all firmware
/// state. Seeds the BDA the way POST leaves it: 80x25 color text, page 0,
/// cursor home, tick counter carried over from the clock source.
pub fn post(machine: &mut Machine) {
    machine.bda.write_byte(bda::VIDEO_MODE, 0x03);
    machine.bda.write_word(bda::VIDEO_COLS, TEXT_COLS as u16);
    machine.bda.write_byte(bda::VIDEO_ROWS, TEXT_ROWS as u8 - 1);
    machine.bda.write_byte(bda::ACTIVE_PAGE, 0);
    for i in 0..16 {
        machine.bda.write_byte(bda::CURSOR_POS + i, 0);
    }

    let ticks = machine.clock_ticks();
    machine.bda.write_word(bda::TICK_COUNT, ticks as u16);
    machine.bda.write_word(bda::TICK_COUNT + 2, (ticks >> 16) as u16);
    machine.bda.write_byte(bda::TICK_OVERFLOW, 0);

    log::debug!("[BIOS] POST complete, mode 03h, {} ticks", ticks);
}
