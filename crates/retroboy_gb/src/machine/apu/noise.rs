use super::envelope::Envelope;
use super::length::LengthCounter;

/// Base divisors selected by NR43 bits 0-2.
const DIVISORS: [u32; 8] = [8, 16, 32, 48, 64, 80, 96, 112];

/// Channel 4: pseudo-random noise from a 15-bit (or 7-bit) LFSR.
#[derive(Clone, Debug)]
pub(super) struct NoiseChannel {
    pub(super) enabled: bool,
    dac_enabled: bool,
    divisor_code: u8,
    clock_shift: u8,
    width7: bool,
    lfsr: u16,
    timer: u32,
    length: LengthCounter,
    envelope: Envelope,
}

impl NoiseChannel {
    pub(super) fn new() -> Self {
        Self {
            enabled: false,
            dac_enabled: false,
            divisor_code: 0,
            clock_shift: 0,
            width7: false,
            lfsr: 0x7FFF,
            timer: 0,
            length: LengthCounter::new(64),
            envelope: Envelope::default(),
        }
    }

    fn period(&self) -> u32 {
        DIVISORS[usize::from(self.divisor_code)] << self.clock_shift
    }

    /// Write NR41..NR44; `reg` counts from NR41 = 1.
    pub(super) fn write(&mut self, reg: u16, value: u8) {
        match reg {
            1 => self.length.load(value & 0x3F),
            2 => {
                self.envelope.write(value);
                self.dac_enabled = value & 0xF8 != 0;
                if !self.dac_enabled {
                    self.enabled = false;
                }
            }
            3 => {
                self.clock_shift = value >> 4;
                self.width7 = value & 0x08 != 0;
                self.divisor_code = value & 0x07;
            }
            _ => {
                self.length.set_enabled(value & 0x40 != 0);
                if value & 0x80 != 0 {
                    self.enabled = self.dac_enabled;
                    self.length.trigger();
                    self.timer = self.period();
                    self.envelope.trigger();
                    self.lfsr = 0x7FFF;
                }
            }
        }
    }

    pub(super) fn tick(&mut self) {
        if self.timer > 1 {
            self.timer -= 1;
            return;
        }
        self.timer = self.period();

        let bit = (self.lfsr ^ (self.lfsr >> 1)) & 1;
        self.lfsr = (self.lfsr >> 1) | (bit << 14);
        if self.width7 {
            self.lfsr = (self.lfsr & !0x40) | (bit << 6);
        }
    }

    pub(super) fn clock_length(&mut self) {
        if self.length.clock() {
            self.enabled = false;
        }
    }

    pub(super) fn clock_envelope(&mut self) {
        self.envelope.clock();
    }

    pub(super) fn output(&self) -> u8 {
        if !self.enabled || !self.dac_enabled || self.lfsr & 1 != 0 {
            return 0;
        }
        self.envelope.volume()
    }

    #[cfg(test)]
    pub(super) fn lfsr(&self) -> u16 {
        self.lfsr
    }
}
