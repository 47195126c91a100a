use std::path::Path;

use super::apu::SampleBuffer;
use super::cartridge::{Cartridge, CartridgeHeader};
use super::joypad::{Button, InputState};
use super::ppu::FrameBuffer;
use super::serial::SerialLog;
use super::{GameBoyBus, Verdict};
use crate::config::GameBoyConfig;
use crate::cpu::Cpu;
use crate::error::Result;
use crate::scheduler::Clocked;
use crate::CYCLES_PER_FRAME;

/// The complete DMG machine: CPU plus the bus that owns every peripheral.
///
/// `GameBoy` is strictly sequential. To run it on a background thread, hand
/// it to a [`Scheduler`](crate::Scheduler) or use
/// [`GameBoyApp`](crate::GameBoyApp); the shared handles returned by
/// [`frame_buffer`](Self::frame_buffer), [`sample_buffer`](Self::sample_buffer)
/// and [`serial_log`](Self::serial_log) stay usable from other threads.
pub struct GameBoy {
    cpu: Cpu,
    bus: GameBoyBus,
    input: InputState,
    cycles: u64,
}

impl GameBoy {
    pub fn new(rom: &[u8], config: &GameBoyConfig) -> Result<Self> {
        let cartridge = Cartridge::new(rom)?;
        let input = InputState::default();
        Ok(Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::new(cartridge, config, input.clone()),
            input,
            cycles: 0,
        })
    }

    /// Read a ROM image from disk and build a machine from it.
    pub fn from_path(path: impl AsRef<Path>, config: &GameBoyConfig) -> Result<Self> {
        let rom = std::fs::read(path)?;
        Self::new(&rom, config)
    }

    /// Execute one CPU step and return the T-cycles it took.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.cycles += u64::from(cycles);
        cycles
    }

    /// Run for at least one frame's worth of T-cycles. Returns the number
    /// actually executed, which overshoots by less than one instruction.
    pub fn step_frame(&mut self) -> u32 {
        let mut elapsed = 0;
        while elapsed < CYCLES_PER_FRAME {
            elapsed += self.step();
        }
        elapsed
    }

    /// Run until `checker` sees a result in the serial output, or until
    /// `max_cycles` T-cycles have passed.
    pub fn run_until_verdict(&mut self, checker: fn(&[u8]) -> Verdict, max_cycles: u64) -> Verdict {
        let log = self.bus.serial_log().clone();
        let deadline = self.cycles.saturating_add(max_cycles);
        let mut seen = 0;

        while self.cycles < deadline {
            self.step();
            // Only re-scan when the ROM printed something new.
            let written = log.total_written();
            if written != seen {
                seen = written;
                let verdict = checker(&log.snapshot());
                if verdict.is_done() {
                    return verdict;
                }
            }
        }
        Verdict::Pending
    }

    /// Press or release a button. Takes effect at the next CPU step.
    pub fn set_button(&self, button: Button, pressed: bool) {
        self.input.set(button, pressed);
    }

    pub(crate) fn input(&self) -> &InputState {
        &self.input
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn header(&self) -> &CartridgeHeader {
        self.bus.header()
    }

    /// T-cycles executed since power-on.
    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }

    pub fn serial_output(&self) -> Vec<u8> {
        self.bus.serial_log().snapshot()
    }

    pub fn serial_log(&self) -> &SerialLog {
        self.bus.serial_log()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.bus.frame_buffer()
    }

    pub fn sample_buffer(&self) -> &SampleBuffer {
        self.bus.sample_buffer()
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut GameBoyBus {
        &mut self.bus
    }
}

impl Clocked for GameBoy {
    fn step(&mut self) -> u32 {
        GameBoy::step(self)
    }
}
