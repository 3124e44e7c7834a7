use std::path::PathBuf;

use clap::Parser;
use clap_derive::Parser;

use crate::machine::clock::WallClock;
use crate::machine::Machine;

mod bios;
mod demo;
mod hal;
mod io;
mod machine;
mod render;

#[derive(Parser, Debug)]
#[command(name = "bioshal", about = "Real-mode BIOS and port I/O demo on a simulated PC")]
struct CLI {
    /// Render the text page and graphics surface to the terminal
    #[arg(long)]
    render: bool,
    /// Clock speed multiplier (2 makes the one-second delays finish in half the time)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
    /// Number of draw iterations in the demonstration sequence
    #[arg(long, default_value_t = 2)]
    loops: u32,
    /// Write the COM1 transcript to this file on exit
    #[arg(long)]
    serial_dump: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = CLI::parse();

    let mut machine = Machine::new(Box::new(WallClock::new(args.speed)));
    demo::run(&mut machine, args.loops, args.render);

    if machine.rebooted {
        log::info!("[BIOS] control handed back to the boot path");
    }
    let transcript = machine.serial_transcript();
    log::info!("[COM1] {} bytes transmitted", transcript.len());
    if let Some(path) = args.serial_dump {
        if let Err(err) = std::fs::write(&path, &transcript) {
            log::error!("failed to write {}: {}", path.display(), err);
        }
    }
}
