//! The DMG machine: cartridge, bus, peripherals and the top-level
//! [`GameBoy`] that steps them with the CPU.

mod apu;
mod bus;
mod cartridge;
mod compliance;
mod gameboy;
mod interrupt;
mod joypad;
mod ppu;
mod serial;
#[cfg(test)]
pub(crate) mod test_rom;
mod timer;

pub(crate) use bus::GameBoyBus;
pub(crate) use joypad::InputState;

pub use apu::SampleBuffer;
pub(crate) use apu::SAMPLE_PERIOD;
pub use cartridge::CartridgeHeader;
pub use compliance::Verdict;
pub use gameboy::GameBoy;
pub use interrupt::{Interrupt, InterruptFlags};
pub use joypad::Button;
pub use ppu::{FrameBuffer, FrameSnapshot};
pub use serial::SerialLog;
