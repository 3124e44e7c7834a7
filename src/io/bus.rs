use std::cell::RefCell;
use std::rc::Rc;

/// A device answering on one or more I/O port addresses.
///
/// Real-mode code runs at ring 0, so port access is unconditional: reads
/// and writes never fail, they just hit whatever hardware is mapped there.
pub trait IoDevice {
    fn port_in_byte(&mut self, port: u16) -> u8;
    fn port_out_byte(&mut self, port: u16, value: u8);

    fn name(&self) -> &'static str;
}

struct PortMapping {
    start: u16,
    end: u16,
    device_idx: usize,
}

/// Routes byte-wide port I/O to the registered device, if any.
/// Reads from unmapped ports float high (0xFF); writes are dropped.
pub struct IoBus {
    devices: Vec<Box<dyn IoDevice>>,
    mappings: Vec<PortMapping>,
}

impl IoBus {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            mappings: Vec::new(),
        }
    }

    pub fn register(&mut self, start: u16, end: u16, device: Box<dyn IoDevice>) {
        log::debug!(
            "[BUS] {} mapped at {:04X}-{:04X}",
            device.name(),
            start,
            end
        );
        let idx = self.devices.len();
        self.devices.push(device);
        self.mappings.push(PortMapping {
            start,
            end,
            device_idx: idx,
        });
    }

    pub fn port_in_byte(&mut self, port: u16) -> u8 {
        for i in 0..self.mappings.len() {
            if port >= self.mappings[i].start && port <= self.mappings[i].end {
                return self.devices[self.mappings[i].device_idx].port_in_byte(port);
            }
        }
        0xFF
    }

    pub fn port_out_byte(&mut self, port: u16, value: u8) {
        for i in 0..self.mappings.len() {
            if port >= self.mappings[i].start && port <= self.mappings[i].end {
                self.devices[self.mappings[i].device_idx].port_out_byte(port, value);
                return;
            }
        }
    }
}

/// Bus adapter for a device the machine also keeps a handle to
/// (for state queries outside the port protocol).
pub struct SharedDevice<D: IoDevice>(pub Rc<RefCell<D>>);

impl<D: IoDevice> IoDevice for SharedDevice<D> {
    fn port_in_byte(&mut self, port: u16) -> u8 {
        self.0.borrow_mut().port_in_byte(port)
    }

    fn port_out_byte(&mut self, port: u16, value: u8) {
        self.0.borrow_mut().port_out_byte(port, value);
    }

    fn name(&self) -> &'static str {
        self.0.borrow().name()
    }
}
