use std::cell::Cell;
use std::rc::Rc;

use crate::bios::bda;
use crate::hal::output::{hex_digit, print_hex8, print_hex32, print_string, CharSink};
use crate::hal::time::{current_ticks, delay_one_second};
use crate::hal::video::{fill_rect, plot_pixel, set_mode, FillPattern};
use crate::machine::clock::TickSource;
use crate::machine::Machine;

/// Sink capturing every character for assertions.
struct VecSink(Vec<u8>);

impl CharSink for VecSink {
    fn put(&mut self, c: u8) {
        self.0.push(c);
    }
}

// ========================================================================
// Formatted output helpers
// ========================================================================

#[test]
fn hex_digit_matches_ascii_encoding() {
    let expected = b"0123456789abcdef";
    for value in 0..16u8 {
        assert_eq!(hex_digit(value), expected[value as usize]);
        // Idempotent with respect to call order
        assert_eq!(hex_digit(value), expected[value as usize]);
    }
}

#[test]
fn print_hex8_exact_character_sequence() {
    let mut sink = VecSink(Vec::new());
    print_hex8(&mut sink, 0xA5);
    assert_eq!(sink.0, b"0xa5\r\n");
}

#[test]
fn print_hex32_dumps_bytes_little_endian() {
    let mut sink = VecSink(Vec::new());
    print_hex32(&mut sink, 0x1234_5678);
    assert_eq!(sink.0, b"0x78\r\n0x56\r\n0x34\r\n0x12\r\n");
}

#[test]
fn print_string_stops_at_terminator() {
    let mut sink = VecSink(Vec::new());
    print_string(&mut sink, b"");
    assert!(sink.0.is_empty());

    print_string(&mut sink, b"AB");
    assert_eq!(sink.0, b"AB");

    sink.0.clear();
    print_string(&mut sink, b"AB\0CD");
    assert_eq!(sink.0, b"AB", "bytes past the NUL must not be emitted");
}

// ========================================================================
// Timing service
// ========================================================================

/// One tick per sample, with an externally visible sample count.
struct CountingClock {
    current: u32,
    samples: Rc<Cell<u32>>,
}

impl TickSource for CountingClock {
    fn ticks(&mut self) -> u32 {
        self.samples.set(self.samples.get() + 1);
        let now = self.current;
        self.current = self.current.wrapping_add(1);
        now
    }
}

#[test]
fn delay_waits_exactly_eighteen_ticks() {
    let samples = Rc::new(Cell::new(0));
    let mut machine = Machine::new(Box::new(CountingClock {
        current: 100,
        samples: samples.clone(),
    }));
    let post_samples = samples.get(); // POST reads the clock once

    delay_one_second(&mut machine);

    // Start sample plus one per tick until the difference reaches 18.
    assert_eq!(samples.get() - post_samples, 19);
    let start = 100 + post_samples as u16;
    assert_eq!(machine.bda.read_word(bda::TICK_COUNT), start + 18);
}

#[test]
fn delay_survives_counter_wraparound() {
    // Low tick word wraps at 65535 -> 0 mid-delay; the modular subtraction
    // must still see the difference grow monotonically.
    let samples = Rc::new(Cell::new(0));
    let mut machine = Machine::new(Box::new(CountingClock {
        current: 65_530,
        samples: samples.clone(),
    }));
    let post_samples = samples.get();
    let start = 65_530u16.wrapping_add(post_samples as u16);

    delay_one_second(&mut machine);

    assert_eq!(samples.get() - post_samples, 19, "must not return early at the wrap");
    let last = machine.bda.read_word(bda::TICK_COUNT);
    assert_eq!(last.wrapping_sub(start), 18);
}

#[test]
fn current_ticks_returns_low_word() {
    let samples = Rc::new(Cell::new(0));
    let mut machine = Machine::new(Box::new(CountingClock {
        current: 0x0002_0005,
        samples,
    }));
    let first = current_ticks(&mut machine);
    // POST consumed one sample; either way the high word never leaks in.
    assert!(first == 0x0006 || first == 0x0005);
}

// ========================================================================
// Pixel drawing
// ========================================================================

#[test]
fn fill_rect_column_pattern_order_and_colors() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x100);
    machine.video.plot_log.clear();

    fill_rect(&mut machine, 2, 3, 3, 2, FillPattern::ColumnIndex);

    let expected = vec![
        (2, 3, 2),
        (2, 4, 2),
        (3, 3, 3),
        (3, 4, 3),
        (4, 3, 4),
        (4, 4, 4),
    ];
    assert_eq!(machine.video.plot_log, expected);
}

#[test]
fn fill_rect_row_pattern_differs_only_in_color() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x100);
    machine.video.plot_log.clear();

    fill_rect(&mut machine, 2, 3, 3, 2, FillPattern::RowIndex);

    let coords: Vec<(u16, u16)> = machine.video.plot_log.iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(coords, vec![(2, 3), (2, 4), (3, 3), (3, 4), (4, 3), (4, 4)]);
    for &(_, y, color) in &machine.video.plot_log {
        assert_eq!(color, y as u8);
    }
}

#[test]
fn fill_rect_visits_every_pixel_exactly_once() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x100);
    machine.video.plot_log.clear();

    fill_rect(&mut machine, 10, 20, 7, 5, FillPattern::ColumnIndex);

    assert_eq!(machine.video.plot_log.len(), 7 * 5);
    let mut coords: Vec<(u16, u16)> =
        machine.video.plot_log.iter().map(|&(x, y, _)| (x, y)).collect();
    coords.sort_unstable();
    coords.dedup();
    assert_eq!(coords.len(), 7 * 5, "no pixel may be visited twice");
}

#[test]
fn plot_pixel_color_lands_on_surface() {
    let mut machine = Machine::new_test();
    set_mode(&mut machine, 0x100);

    plot_pixel(&mut machine, 15, 9, 0x2A);

    let surface = machine.video.surface.as_ref().unwrap();
    assert_eq!(surface.pixel(15, 9), 0x2A);
}
