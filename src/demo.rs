//! The demonstration choreography: a fixed script exercising every
//! hardware path the layer offers — serial, teletype, tones, mode
//! switches, gradient fills — and ending with a bootstrap reentry.
//! Arbitrary by design; the contracts live in `hal`, not here.

use crate::hal;
use crate::hal::output::{print_hex8, print_string, CharSink, DisplaySink, SerialSink};
use crate::hal::time::delay_one_second;
use crate::hal::video::FillPattern;
use crate::machine::Machine;
use crate::render;

const BANNER: &[u8] = b"\r\nStarting BIOSHAL...\r\n\r\n";

pub fn run(machine: &mut Machine, loops: u32, render: bool) {
    // Report the POST-time mode over the wire before touching anything
    let mode = hal::video::query_mode(machine);
    SerialSink::new(machine).put(mode);

    {
        let mut display = DisplaySink::new(machine);
        print_string(&mut display, BANNER);
        print_hex8(&mut display, mode);
    }
    if render {
        let _ = render::draw_text(&machine.video);
    }

    hal::sound::start_tone(machine, 30);
    log_speaker(machine);
    delay_one_second(machine);

    hal::video::set_background(machine, 0x21);
    let mode = hal::video::query_mode(machine);
    SerialSink::new(machine).put(mode);
    delay_one_second(machine);

    for _ in 0..loops {
        hal::video::set_mode(machine, 0x100);
        let mode = hal::video::query_mode(machine);
        SerialSink::new(machine).put(mode);
        hal::sound::start_tone(machine, 40);
        log_speaker(machine);
        delay_one_second(machine);

        hal::video::fill_rect(machine, 0, 0, 100, 30, FillPattern::ColumnIndex);
        show_surface(machine, render);
        delay_one_second(machine);

        hal::video::set_mode(machine, 0x115);
        hal::sound::start_tone(machine, 60);
        log_speaker(machine);
        delay_one_second(machine);

        hal::video::fill_rect(machine, 200, 0, 100, 30, FillPattern::RowIndex);
        show_surface(machine, render);
        delay_one_second(machine);
    }

    SerialSink::new(machine).put(b'#');
    hal::reboot(machine);
}

fn show_surface(machine: &Machine, render: bool) {
    if !render {
        return;
    }
    if let Some(ref surface) = machine.video.surface {
        if let Err(err) = render::draw_surface(surface) {
            log::error!("surface render failed: {}", err);
        }
    }
}

fn log_speaker(machine: &Machine) {
    if let Some(hz) = machine.speaker_frequency() {
        log::info!("[SPEAKER] tone at {} Hz", hz);
    }
}
