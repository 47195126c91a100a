pub mod app;
pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod scheduler;

pub use app::GameBoyApp;
pub use config::{GameBoyConfig, Pacing, Palette};
pub use error::{GbError, Result};
pub use machine::{
    Button, CartridgeHeader, FrameBuffer, FrameSnapshot, GameBoy, SampleBuffer, SerialLog,
    Verdict,
};
pub use scheduler::{Clocked, Scheduler, SchedulerControl, SpeedStats};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Master clock in T-cycles per second.
pub const CPU_FREQUENCY: u64 = 4_194_304;
/// T-cycles (dots) in one full frame: 154 lines of 456 dots.
pub const CYCLES_PER_FRAME: u32 = 70_224;
/// Stereo sample frames per second produced by the APU.
pub const SAMPLE_RATE: u32 = CPU_FREQUENCY as u32 / machine::SAMPLE_PERIOD;
