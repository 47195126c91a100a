use super::envelope::Envelope;
use super::length::LengthCounter;
use super::sweep::{Sweep, SweepStep};

/// 8-step duty waveforms for 12.5%, 25%, 50% and 75%.
const DUTY_TABLE: [[u8; 8]; 4] = [
    [0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 0],
];

/// Square channel (CH1 with sweep, CH2 without).
#[derive(Clone, Debug)]
pub(super) struct PulseChannel {
    pub(super) enabled: bool,
    dac_enabled: bool,
    duty: u8,
    duty_pos: u8,
    frequency: u16,
    timer: u16,
    length: LengthCounter,
    envelope: Envelope,
    sweep: Option<Sweep>,
}

impl PulseChannel {
    pub(super) fn new(with_sweep: bool) -> Self {
        Self {
            enabled: false,
            dac_enabled: false,
            duty: 0,
            duty_pos: 0,
            frequency: 0,
            timer: 0,
            length: LengthCounter::new(64),
            envelope: Envelope::default(),
            sweep: with_sweep.then(Sweep::default),
        }
    }

    fn period(&self) -> u16 {
        (2048 - self.frequency) * 4
    }

    /// Write NRx0..NRx4; `reg` is the offset within the channel's block.
    pub(super) fn write(&mut self, reg: u16, value: u8) {
        match reg {
            0 => {
                if let Some(sweep) = self.sweep.as_mut() {
                    sweep.write(value);
                }
            }
            1 => {
                self.duty = value >> 6;
                self.length.load(value & 0x3F);
            }
            2 => {
                self.envelope.write(value);
                self.dac_enabled = value & 0xF8 != 0;
                if !self.dac_enabled {
                    self.enabled = false;
                }
            }
            3 => self.frequency = (self.frequency & 0x700) | u16::from(value),
            _ => {
                self.frequency = (self.frequency & 0x0FF) | (u16::from(value & 0x07) << 8);
                self.length.set_enabled(value & 0x40 != 0);
                if value & 0x80 != 0 {
                    self.trigger();
                }
            }
        }
    }

    fn trigger(&mut self) {
        self.enabled = self.dac_enabled;
        self.length.trigger();
        self.timer = self.period();
        self.envelope.trigger();
        if let Some(sweep) = self.sweep.as_mut() {
            if !sweep.trigger(self.frequency) {
                self.enabled = false;
            }
        }
    }

    pub(super) fn tick(&mut self) {
        if self.timer <= 1 {
            self.timer = self.period();
            self.duty_pos = (self.duty_pos + 1) & 0x07;
        } else {
            self.timer -= 1;
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

    pub(super) fn clock_sweep(&mut self) {
        let Some(sweep) = self.sweep.as_mut() else {
            return;
        };
        match sweep.clock() {
            SweepStep::Idle => {}
            SweepStep::Frequency(frequency) => self.frequency = frequency,
            SweepStep::Overflow => self.enabled = false,
        }
    }

    /// Current output level, 0..=15.
    pub(super) fn output(&self) -> u8 {
        if !self.enabled || !self.dac_enabled {
            return 0;
        }
        DUTY_TABLE[usize::from(self.duty)][usize::from(self.duty_pos)] * self.envelope.volume()
    }
}
