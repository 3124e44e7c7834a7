use std::time::Instant;

use crate::io::pit;

/// BIOS tick rate: the PIT oscillator divided by the channel 0 reload of
/// 65536, ~18.2065 ticks per second.
pub const TICK_RATE_HZ: f64 = pit::OSC_HZ as f64 / 65_536.0;

/// Tick count at which the BIOS clock wraps to zero (24 hours).
pub const TICKS_PER_DAY: u32 = 0x0018_00B0;

/// Source of the hardware-maintained tick counter.
///
/// On a real PC this is the BDA dword the timer IRQ increments in the
/// background. Injecting it lets tests drive virtual time deterministically
/// while the demo runs against wall time.
pub trait TickSource {
    fn ticks(&mut self) -> u32;
}

/// Derives ticks from elapsed wall time, optionally scaled so delays can be
/// shortened without changing the tick arithmetic.
pub struct WallClock {
    origin: Instant,
    speed: f64,
}

impl WallClock {
    pub fn new(speed: f64) -> Self {
        Self {
            origin: Instant::now(),
            speed: if speed > 0.0 { speed } else { 1.0 },
        }
    }
}

impl TickSource for WallClock {
    fn ticks(&mut self) -> u32 {
        let elapsed = self.origin.elapsed().as_secs_f64() * self.speed;
        (elapsed * TICK_RATE_HZ) as u32 % TICKS_PER_DAY
    }
}

/// Advances a fixed amount per sample. Test-only stand-in for the IRQ-driven
/// counter.
#[cfg(test)]
pub struct SteppingClock {
    current: u32,
    step: u32,
}

#[cfg(test)]
impl SteppingClock {
    pub fn new(start: u32, step: u32) -> Self {
        Self {
            current: start,
            step,
        }
    }
}

#[cfg(test)]
impl TickSource for SteppingClock {
    fn ticks(&mut self) -> u32 {
        let now = self.current;
        self.current = self.current.wrapping_add(self.step);
        now
    }
}
