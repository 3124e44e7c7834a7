pub mod clock;
pub mod registers;
pub mod video;

use std::cell::RefCell;
use std::rc::Rc;

use crate::bios;
use crate::bios::bda::Bda;
use crate::io::bus::{IoBus, SharedDevice};
use crate::io::pit::{self, Pit};
use crate::io::speaker::SystemControl;
use crate::io::uart::{Uart, COM1_BASE};
use crate::machine::clock::TickSource;
use crate::machine::registers::Registers;
use crate::machine::video::VideoState;

/// The simulated PC: register file, BIOS data area, display adapter state,
/// the port bus with its devices, and the tick source standing in for the
/// timer IRQ. Exactly one exists per run; every hardware resource behind it
/// is a singleton reachable only through the BIOS services and the port
/// bus, never shared directly.
pub struct Machine {
    pub registers: Registers,
    pub bda: Bda,
    pub video: VideoState,
    pub rebooted: bool,

    io_bus: IoBus,
    clock: Box<dyn TickSource>,

    // Handles into bus devices, for state queries outside the port protocol
    pit: Rc<RefCell<Pit>>,
    control: Rc<RefCell<SystemControl>>,
    uart: Rc<RefCell<Uart>>,
}

impl Machine {
    pub fn new(clock: Box<dyn TickSource>) -> Self {
        let pit = Rc::new(RefCell::new(Pit::new()));
        let control = Rc::new(RefCell::new(SystemControl::new()));
        let uart = Rc::new(RefCell::new(Uart::new()));

        let mut io_bus = IoBus::new();
        io_bus.register(0x40, 0x43, Box::new(SharedDevice(pit.clone())));
        io_bus.register(0x61, 0x61, Box::new(SharedDevice(control.clone())));
        io_bus.register(COM1_BASE, COM1_BASE + 7, Box::new(SharedDevice(uart.clone())));

        let mut machine = Self {
            registers: Registers::new(),
            bda: Bda::new(),
            video: VideoState::new(),
            rebooted: false,
            io_bus,
            clock,
            pit,
            control,
            uart,
        };
        bios::init::post(&mut machine);
        machine
    }

    /// Machine on a deterministic one-tick-per-sample clock.
    #[cfg(test)]
    pub fn new_test() -> Self {
        Self::new(Box::new(clock::SteppingClock::new(0, 1)))
    }

    pub fn port_in_byte(&mut self, port: u16) -> u8 {
        self.io_bus.port_in_byte(port)
    }

    pub fn port_out_byte(&mut self, port: u16, value: u8) {
        self.io_bus.port_out_byte(port, value);
    }

    /// Sample the tick counter (dword, ticks since midnight).
    pub fn clock_ticks(&mut self) -> u32 {
        self.clock.ticks()
    }

    /// Frequency currently audible on the speaker, if the gate is open.
    pub fn speaker_frequency(&self) -> Option<u32> {
        if !self.control.borrow().speaker_enabled() {
            return None;
        }
        let reload = match self.pit.borrow().channel_reload(2) {
            0 => 65_536, // reload of 0 counts the full 16-bit range
            n => n as u32,
        };
        Some(pit::OSC_HZ / reload)
    }

    /// Every byte transmitted on COM1 so far.
    pub fn serial_transcript(&self) -> Vec<u8> {
        self.uart.borrow().transcript().to_vec()
    }

    #[cfg(test)]
    pub fn pit(&self) -> Rc<RefCell<Pit>> {
        self.pit.clone()
    }
}
