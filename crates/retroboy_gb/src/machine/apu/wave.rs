use super::length::LengthCounter;

/// Channel 3: 32 4-bit samples from wave RAM.
#[derive(Clone, Debug)]
pub(super) struct WaveChannel {
    pub(super) enabled: bool,
    /// NR30 bit 7. Independent of `enabled`.
    dac_enabled: bool,
    /// NR32 output level: 0 mutes, 1..=3 shift right by 0..=2.
    level: u8,
    frequency: u16,
    timer: u16,
    position: u8,
    length: LengthCounter,
    ram: [u8; 16],
}

impl WaveChannel {
    pub(super) fn new() -> Self {
        Self {
            enabled: false,
            dac_enabled: false,
            level: 0,
            frequency: 0,
            timer: 0,
            position: 0,
            length: LengthCounter::new(256),
            ram: [0; 16],
        }
    }

    /// Clear every register while keeping wave RAM, as NR52 power-off does.
    pub(super) fn power_off(&mut self) {
        let ram = self.ram;
        *self = Self::new();
        self.ram = ram;
    }

    fn period(&self) -> u16 {
        (2048 - self.frequency) * 2
    }

    pub(super) fn write(&mut self, reg: u16, value: u8) {
        match reg {
            0 => {
                self.dac_enabled = value & 0x80 != 0;
                if !self.dac_enabled {
                    self.enabled = false;
                }
            }
            1 => self.length.load(value),
            2 => self.level = (value >> 5) & 0x03,
            3 => self.frequency = (self.frequency & 0x700) | u16::from(value),
            _ => {
                self.frequency = (self.frequency & 0x0FF) | (u16::from(value & 0x07) << 8);
                self.length.set_enabled(value & 0x40 != 0);
                if value & 0x80 != 0 {
                    self.enabled = self.dac_enabled;
                    self.length.trigger();
                    self.timer = self.period();
                    self.position = 0;
                }
            }
        }
    }

    pub(super) fn read_ram(&self, index: usize) -> u8 {
        self.ram[index & 0x0F]
    }

    pub(super) fn write_ram(&mut self, index: usize, value: u8) {
        self.ram[index & 0x0F] = value;
    }

    pub(super) fn tick(&mut self) {
        if self.timer <= 1 {
            self.timer = self.period();
            self.position = (self.position + 1) & 0x1F;
        } else {
            self.timer -= 1;
        }
    }

    pub(super) fn clock_length(&mut self) {
        if self.length.clock() {
            self.enabled = false;
        }
    }

    pub(super) fn output(&self) -> u8 {
        if !self.enabled || !self.dac_enabled || self.level == 0 {
            return 0;
        }
        let byte = self.ram[usize::from(self.position / 2)];
        let sample = if self.position % 2 == 0 { byte >> 4 } else { byte & 0x0F };
        sample >> (self.level - 1)
    }
}
