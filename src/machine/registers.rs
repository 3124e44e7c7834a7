/// A 16-bit general register with 8086-style high/low byte views.
#[derive(Clone, Copy, Default)]
pub struct Register(u16);

impl Register {
    #[inline(always)]
    pub fn word(&self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub fn set(&mut self, word: u16) {
        self.0 = word;
    }

    #[inline(always)]
    pub fn high(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline(always)]
    pub fn low(&self) -> u8 {
        self.0 as u8
    }

    #[inline(always)]
    pub fn set_high(&mut self, byte: u8) {
        self.0 = (self.0 & 0x00FF) | ((byte as u16) << 8);
    }

    #[inline(always)]
    pub fn set_low(&mut self, byte: u8) {
        self.0 = (self.0 & 0xFF00) | byte as u16;
    }
}

/// The register file visible to BIOS services (AX, BX, CX, DX).
///
/// Each service reads its arguments and writes its results here, exactly
/// as the real firmware call would through the processor registers.
#[derive(Default)]
pub struct Registers {
    pub ax: Register,
    pub bx: Register,
    pub cx: Register,
    pub dx: Register,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_low_views() {
        let mut reg = Register::default();
        reg.set(0x1234);
        assert_eq!(reg.high(), 0x12);
        assert_eq!(reg.low(), 0x34);

        reg.set_high(0xAB);
        assert_eq!(reg.word(), 0xAB34);
        reg.set_low(0xCD);
        assert_eq!(reg.word(), 0xABCD);
    }
}
