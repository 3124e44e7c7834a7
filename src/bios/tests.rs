use crate::bios::{self, bda};
use crate::hal::output::{print_string, CharSink, DisplaySink, SerialSink};
use crate::hal::ports::{port_read, port_write};
use crate::hal::sound::start_tone;
use crate::hal::video::{plot_pixel, query_mode, set_background, set_mode};
use crate::io::uart::COM1_BASE;
use crate::machine::video::TEXT_ROWS;
use crate::machine::Machine;

// ========================================================================
// INT 10h: teletype output
// ========================================================================

#[test]
fn teletype_writes_and_advances_cursor() {
    let mut machine = Machine::new_test();
    {
        let mut sink = DisplaySink::new(&mut machine);
        print_string(&mut sink, b"0xa5\r\n");
    }

    assert_eq!(machine.video.row_text(0), "0xa5");
    // CR returned the column, LF advanced the row
    assert_eq!(machine.bda.read_byte(bda::CURSOR_POS), 0);
    assert_eq!(machine.bda.read_byte(bda::CURSOR_POS + 1), 1);
}

#[test]
fn teletype_backspace_and_bell() {
    let mut machine = Machine::new_test();
    {
        let mut sink = DisplaySink::new(&mut machine);
        print_string(&mut sink, b"AB\x08\x07C");
    }
    // Backspace moved the cursor over 'B'; 'C' overwrote it, bell did nothing
    assert_eq!(machine.video.row_text(0), "AC");
    assert_eq!(machine.bda.read_byte(bda::CURSOR_POS), 2);
}

#[test]
fn teletype_wraps_at_column_80() {
    let mut machine = Machine::new_test();
    {
        let mut sink = DisplaySink::new(&mut machine);
        for _ in 0..81 {
            sink.put(b'x');
        }
    }
    assert_eq!(machine.bda.read_byte(bda::CURSOR_POS), 1);
    assert_eq!(machine.bda.read_byte(bda::CURSOR_POS + 1), 1);
    assert_eq!(machine.video.char_at(0, 1), b'x');
}

#[test]
fn teletype_scrolls_at_bottom_row() {
    let mut machine = Machine::new_test();
    {
        let mut sink = DisplaySink::new(&mut machine);
        print_string(&mut sink, b"top");
        for _ in 0..TEXT_ROWS {
            print_string(&mut sink, b"\r\n");
        }
        print_string(&mut sink, b"bottom");
    }
    // "top" scrolled off; the last line holds the newest text
    assert_eq!(machine.video.row_text(0), "");
    assert_eq!(machine.video.row_text(TEXT_ROWS - 1), "bottom");
    assert_eq!(machine.bda.read_byte(bda::CURSOR_POS + 1), TEXT_ROWS as u8 - 1);
}

// ========================================================================
// INT 10h: mode control
// ========================================================================

#[test]
fn post_leaves_text_mode_3() {
    let mut machine = Machine::new_test();
    assert_eq!(query_mode(&mut machine), 0x03);
    assert!(machine.video.surface.is_none());
}

#[test]
fn vesa_set_mode_allocates_surface_and_reports_status() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x100);

    assert_eq!(machine.registers.ax.word(), 0x004F);
    let surface = machine.video.surface.as_ref().unwrap();
    assert_eq!((surface.width, surface.height), (640, 400));
    assert_eq!(query_mode(&mut machine), 0x00); // low byte of 0x100
}

#[test]
fn vesa_linear_framebuffer_bit_selects_same_mode() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x115 | 1 << 14);

    assert_eq!(machine.registers.ax.word(), 0x004F);
    let surface = machine.video.surface.as_ref().unwrap();
    assert_eq!((surface.width, surface.height), (800, 600));
}

#[test]
fn unsupported_vesa_mode_is_silently_ignored() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x100);
    let before = query_mode(&mut machine);

    set_mode(&mut machine, 0x1FF);

    // VBE reports failure in AX, but mode state is untouched — and the HAL
    // never looks at the status anyway.
    assert_eq!(machine.registers.ax.word(), 0x014F);
    assert_eq!(query_mode(&mut machine), before);
    assert!(machine.video.surface.is_some());
}

#[test]
fn legacy_set_mode_13h_through_ah00() {
    let mut machine = Machine::new_test();
    machine.registers.ax.set(0x0013);
    bios::dispatch(&mut machine, 0x10);

    let surface = machine.video.surface.as_ref().unwrap();
    assert_eq!((surface.width, surface.height), (320, 200));
    assert_eq!(query_mode(&mut machine), 0x13);
}

#[test]
fn set_background_stores_border_color() {
    let mut machine = Machine::new_test();
    set_background(&mut machine, 0x21);
    assert_eq!(machine.video.border, 0x21);
}

// ========================================================================
// INT 10h: write pixel
// ========================================================================

#[test]
fn out_of_range_pixel_is_dropped_not_surfaced() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x10D); // 320x200

    plot_pixel(&mut machine, 319, 199, 7);
    plot_pixel(&mut machine, 320, 0, 9);
    plot_pixel(&mut machine, 0, 200, 9);

    let surface = machine.video.surface.as_ref().unwrap();
    assert_eq!(surface.pixel(319, 199), 7);
    // The out-of-range plots went through the same BIOS call path
    assert_eq!(machine.video.plot_log.len(), 3);
}

#[test]
fn pixel_without_graphics_surface_is_a_no_op() {
    let mut machine = Machine::new_test();
    plot_pixel(&mut machine, 5, 5, 1); // still in text mode 3
    assert!(machine.video.surface.is_none());
}

// ========================================================================
// INT 1Ah: tick counter
// ========================================================================

#[test]
fn tick_read_mirrors_bda_and_registers() {
    let mut machine = Machine::new_test(); // stepping clock, POST took tick 0
    machine.registers.ax.set(0x0000);
    bios::dispatch(&mut machine, 0x1A);

    assert_eq!(machine.registers.dx.word(), 1);
    assert_eq!(machine.registers.cx.word(), 0);
    assert_eq!(machine.registers.ax.low(), 0, "no midnight rollover");
    assert_eq!(machine.bda.read_word(bda::TICK_COUNT), 1);

    bios::dispatch(&mut machine, 0x1A);
    assert_eq!(machine.registers.dx.word(), 2);
}

// ========================================================================
// Port bus, PIT, speaker, UART
// ========================================================================

#[test]
fn start_tone_programs_square_wave_and_gate() {
    let mut machine = Machine::new_test();
    start_tone(&mut machine, 30);

    {
        let pit = machine.pit();
        let pit = pit.borrow();
        assert_eq!(pit.channel_reload(2), 30, "divisor low byte, zero high byte");
        assert_eq!(pit.channel_mode(2), 3, "square wave");
    }
    assert_eq!(machine.speaker_frequency(), Some(1_193_182 / 30));
}

#[test]
fn tone_stays_on_until_external_gate_clear() {
    let mut machine = Machine::new_test();
    start_tone(&mut machine, 60);
    assert!(machine.speaker_frequency().is_some());

    // There is no stop_tone; silencing takes an external port write that
    // clears the two gate bits.
    let current = port_read(&mut machine, 0x61);
    port_write(&mut machine, 0x61, current & !0b11);
    assert_eq!(machine.speaker_frequency(), None);
}

#[test]
fn system_control_read_toggles_refresh_bit() {
    let mut machine = Machine::new_test();
    let first = port_read(&mut machine, 0x61);
    let second = port_read(&mut machine, 0x61);
    assert_ne!(first & 0x10, second & 0x10);
}

#[test]
fn serial_sink_bytes_reach_the_uart() {
    let mut machine = Machine::new_test();
    {
        let mut sink = SerialSink::new(&mut machine);
        print_string(&mut sink, b"AB");
        sink.put(b'#');
    }
    assert_eq!(machine.serial_transcript(), b"AB#");
}

#[test]
fn uart_line_status_reports_transmitter_empty() {
    let mut machine = Machine::new_test();
    let lsr = port_read(&mut machine, COM1_BASE + 5);
    assert_ne!(lsr & 0x20, 0);
}

#[test]
fn unmapped_port_reads_float_high() {
    let mut machine = Machine::new_test();
    assert_eq!(port_read(&mut machine, 0x1234), 0xFF);
    // Writes to nowhere are dropped without complaint
    port_write(&mut machine, 0x1234, 0xAA);
}
