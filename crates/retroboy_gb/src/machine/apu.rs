//! Audio processing unit: two pulse channels, a wave channel and a noise
//! channel, mixed to interleaved stereo `i16` samples.

mod envelope;
mod length;
mod noise;
mod pulse;
mod sample_buffer;
mod sweep;
mod wave;

pub use sample_buffer::SampleBuffer;

use noise::NoiseChannel;
use pulse::PulseChannel;
use wave::WaveChannel;

/// T-cycles between frame sequencer steps (512 Hz).
const FRAME_SEQUENCER_PERIOD: u16 = 8192;
/// T-cycles between output samples.
pub(crate) const SAMPLE_PERIOD: u32 = 87;
const VOLUME_FACTOR: i16 = 64;

/// Bits that always read back as 1, for NR10 (0xFF10) through NR51 (0xFF25).
const READ_MASKS: [u8; 0x16] = [
    0x80, 0x3F, 0x00, 0xFF, 0xBF, // NR10-NR14
    0xFF, 0x3F, 0x00, 0xFF, 0xBF, // unused, NR21-NR24
    0x7F, 0xFF, 0x9F, 0xFF, 0xBF, // NR30-NR34
    0xFF, 0xFF, 0x00, 0x00, 0xBF, // unused, NR41-NR44
    0x00, 0x00, // NR50, NR51
];

/// DMG register contents after the boot ROM, NR10 through NR51.
const POWER_ON_REGS: [u8; 0x16] = [
    0x80, 0xBF, 0xF3, 0xFF, 0xBF, //
    0xFF, 0x3F, 0x00, 0xFF, 0xBF, //
    0x7F, 0xFF, 0x9F, 0xFF, 0xBF, //
    0xFF, 0xFF, 0x00, 0x00, 0xBF, //
    0x77, 0xF3,
];

pub(super) struct Apu {
    powered: bool,
    /// Raw NR10..NR51 as last written, for read-back.
    regs: [u8; 0x16],
    ch1: PulseChannel,
    ch2: PulseChannel,
    ch3: WaveChannel,
    ch4: NoiseChannel,
    sequencer_timer: u16,
    sequencer_step: u8,
    sample_timer: u32,
    samples: SampleBuffer,
}

impl Apu {
    /// APU in the post-boot state: powered, channel 1 still flagged active
    /// with its envelope run down to zero.
    pub(super) fn new(samples: SampleBuffer) -> Self {
        let mut apu = Self {
            powered: true,
            regs: [0; 0x16],
            ch1: PulseChannel::new(true),
            ch2: PulseChannel::new(false),
            ch3: WaveChannel::new(),
            ch4: NoiseChannel::new(),
            sequencer_timer: 0,
            sequencer_step: 0,
            sample_timer: 0,
            samples,
        };
        for (offset, &value) in POWER_ON_REGS.iter().enumerate() {
            let addr = 0xFF10 + offset as u16;
            apu.regs[offset] = value;
            // Load the channels without firing their trigger bits.
            let value = if matches!(addr, 0xFF14 | 0xFF19 | 0xFF1E | 0xFF23) {
                value & 0x7F
            } else {
                value
            };
            apu.write_channel_register(addr, value);
        }
        apu.ch1.enabled = true;
        apu
    }

    pub(super) fn sample_buffer(&self) -> &SampleBuffer {
        &self.samples
    }

    pub(super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF10..=0xFF25 => {
                let offset = usize::from(addr - 0xFF10);
                self.regs[offset] | READ_MASKS[offset]
            }
            0xFF26 => self.read_nr52(),
            0xFF30..=0xFF3F => self.ch3.read_ram(usize::from(addr - 0xFF30)),
            _ => 0xFF,
        }
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF10..=0xFF25 => {
                if !self.powered {
                    log::trace!("GB APU: write 0x{value:02X} to 0x{addr:04X} ignored while powered off");
                    return;
                }
                self.regs[usize::from(addr - 0xFF10)] = value;
                self.write_channel_register(addr, value);
            }
            0xFF26 => self.write_nr52(value),
            0xFF30..=0xFF3F => self.ch3.write_ram(usize::from(addr - 0xFF30), value),
            _ => log::trace!("GB APU: write 0x{value:02X} to unused 0x{addr:04X}"),
        }
    }

    fn write_channel_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF10..=0xFF14 => self.ch1.write(addr - 0xFF10, value),
            0xFF16..=0xFF19 => self.ch2.write(addr - 0xFF15, value),
            0xFF1A..=0xFF1E => self.ch3.write(addr - 0xFF1A, value),
            0xFF20..=0xFF23 => self.ch4.write(addr - 0xFF1F, value),
            // NR50/NR51 live in `regs` only; 0xFF15 and 0xFF1F are unused.
            _ => {}
        }
    }

    fn read_nr52(&self) -> u8 {
        0x70 | (u8::from(self.powered) << 7)
            | u8::from(self.ch1.enabled)
            | (u8::from(self.ch2.enabled) << 1)
            | (u8::from(self.ch3.enabled) << 2)
            | (u8::from(self.ch4.enabled) << 3)
    }

    /// Only bit 7 is writable. Powering off clears NR10-NR51 and every
    /// channel; wave RAM survives.
    fn write_nr52(&mut self, value: u8) {
        let on = value & 0x80 != 0;
        if self.powered && !on {
            log::debug!("GB APU: power off");
            self.regs = [0; 0x16];
            self.ch1 = PulseChannel::new(true);
            self.ch2 = PulseChannel::new(false);
            self.ch3.power_off();
            self.ch4 = NoiseChannel::new();
        } else if !self.powered && on {
            log::debug!("GB APU: power on");
            self.sequencer_timer = 0;
            self.sequencer_step = 0;
        }
        self.powered = on;
    }

    /// Advance the APU by one T-cycle.
    pub(in crate::machine) fn tick(&mut self) {
        if self.powered {
            self.ch1.tick();
            self.ch2.tick();
            self.ch3.tick();
            self.ch4.tick();

            self.sequencer_timer += 1;
            if self.sequencer_timer == FRAME_SEQUENCER_PERIOD {
                self.sequencer_timer = 0;
                self.step_frame_sequencer();
            }
        }

        self.sample_timer += 1;
        if self.sample_timer == SAMPLE_PERIOD {
            self.sample_timer = 0;
            let (left, right) = self.mix();
            self.samples.push_frame(left, right);
        }
    }

    fn step_frame_sequencer(&mut self) {
        let step = self.sequencer_step;
        if step % 2 == 0 {
            self.ch1.clock_length();
            self.ch2.clock_length();
            self.ch3.clock_length();
            self.ch4.clock_length();
        }
        if step == 2 || step == 6 {
            self.ch1.clock_sweep();
        }
        if step == 7 {
            self.ch1.clock_envelope();
            self.ch2.clock_envelope();
            self.ch4.clock_envelope();
        }
        self.sequencer_step = (step + 1) & 0x07;
    }

    /// One stereo sample. NR51 routes channel N to the right output with bit
    /// N and to the left with bit N+4; NR50 scales each side by 1..=8.
    fn mix(&self) -> (i16, i16) {
        let outputs = [
            self.ch1.output(),
            self.ch2.output(),
            self.ch3.output(),
            self.ch4.output(),
        ];
        let nr50 = self.regs[0x14];
        let nr51 = self.regs[0x15];

        let mut left = 0i16;
        let mut right = 0i16;
        for (channel, &output) in outputs.iter().enumerate() {
            if nr51 & (0x10 << channel) != 0 {
                left += i16::from(output);
            }
            if nr51 & (0x01 << channel) != 0 {
                right += i16::from(output);
            }
        }

        let left_volume = i16::from((nr50 >> 4) & 0x07) + 1;
        let right_volume = i16::from(nr50 & 0x07) + 1;
        (
            left * left_volume * VOLUME_FACTOR,
            right * right_volume * VOLUME_FACTOR,
        )
    }
}

#[cfg(test)]
mod tests;
