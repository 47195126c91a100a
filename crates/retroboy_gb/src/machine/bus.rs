use super::apu::{Apu, SampleBuffer};
use super::cartridge::{Cartridge, CartridgeHeader};
use super::joypad::{InputState, Joypad};
use super::ppu::{FrameBuffer, Ppu};
use super::serial::{Serial, SerialLog};
use super::timer::Timer;
use super::InterruptFlags;
use crate::config::GameBoyConfig;

mod dma;
mod init;
mod read;
mod traits;
mod write;

use dma::OamDma;

const WRAM_SIZE: usize = 0x2000;
const HRAM_SIZE: usize = 0x7F;

/// DMG system bus: owns every peripheral and advances them in lockstep.
///
/// Each CPU memory access costs one M-cycle; the bus performs the access
/// and then ticks the machine four times via [`GameBoyBus::tick_tcycle`].
pub(crate) struct GameBoyBus {
    cartridge: Cartridge,
    wram: Box<[u8; WRAM_SIZE]>,
    hram: [u8; HRAM_SIZE],
    /// IF (0xFF0F), lower five bits.
    iflags: InterruptFlags,
    /// IE (0xFFFF). All eight bits are stored and read back.
    ie: u8,
    timer: Timer,
    serial: Serial,
    joypad: Joypad,
    ppu: Ppu,
    apu: Apu,
    dma: OamDma,
}

impl GameBoyBus {
    pub(crate) fn new(cartridge: Cartridge, config: &GameBoyConfig, input: InputState) -> Self {
        let mut bus = Self {
            cartridge,
            wram: Box::new([0; WRAM_SIZE]),
            hram: [0; HRAM_SIZE],
            iflags: InterruptFlags::empty(),
            ie: 0,
            timer: Timer::new(),
            serial: Serial::new(SerialLog::default()),
            joypad: Joypad::new(input),
            ppu: Ppu::new(config.palette),
            apu: Apu::new(SampleBuffer::new(config.sample_buffer_capacity)),
            dma: OamDma::default(),
        };
        bus.apply_dmg_initial_state(config.randomize_internal_ram);
        bus
    }

    /// Advance every peripheral by one T-cycle.
    pub(super) fn tick_tcycle(&mut self) {
        self.timer.tick_tcycle(&mut self.iflags);
        self.serial.tick_tcycle(&mut self.iflags);
        self.tick_dma();
        self.ppu.tick_dot(&mut self.iflags);
        self.apu.tick();
    }

    fn tick_mcycle(&mut self) {
        for _ in 0..4 {
            self.tick_tcycle();
        }
    }

    pub(crate) fn header(&self) -> &CartridgeHeader {
        self.cartridge.header()
    }

    pub(crate) fn frame_buffer(&self) -> &FrameBuffer {
        self.ppu.frame_buffer()
    }

    pub(crate) fn sample_buffer(&self) -> &SampleBuffer {
        self.apu.sample_buffer()
    }

    pub(crate) fn serial_log(&self) -> &SerialLog {
        self.serial.log()
    }

    #[cfg(test)]
    pub(crate) fn interrupt_flags(&self) -> InterruptFlags {
        self.iflags
    }
}
