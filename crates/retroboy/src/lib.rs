//! Headless runner for the RetroBoy Game Boy core.
//!
//! There is no window and no audio device: the runner drives the machine
//! either frame by frame, until a test ROM reports a verdict, or in real time
//! on the emulation thread for a fixed wall-clock duration.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use retroboy_gb::{GameBoy, GameBoyApp, GameBoyConfig, Verdict};

/// Which serial protocol a test ROM reports its result with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Suite {
    /// "Passed" / "Failed" text.
    Blargg,
    /// Fibonacci bytes on success, six 0x42 bytes on failure.
    Mooneye,
}

impl Suite {
    fn checker(self) -> fn(&[u8]) -> Verdict {
        match self {
            Suite::Blargg => Verdict::from_blargg_serial,
            Suite::Mooneye => Verdict::from_mooneye_serial,
        }
    }
}

pub enum RunMode {
    /// Step this many frames as fast as possible.
    Frames(u32),
    /// Run until the ROM reports a verdict or the cycle budget runs out.
    Check { suite: Suite, max_cycles: u64 },
    /// Run on the emulation thread for a wall-clock duration.
    RealTime(Duration),
}

/// What a run produced.
#[derive(Debug)]
pub struct Report {
    pub title: String,
    pub verdict: Option<Verdict>,
    pub frames: u64,
    pub serial: Vec<u8>,
    /// RGBA pixels of the last published frame.
    pub pixels: Vec<u8>,
}

pub fn run(rom_path: &Path, config: GameBoyConfig, mode: RunMode) -> Result<Report> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;
    log::info!("Playing ROM path: '{}'", rom_path.display());

    match mode {
        RunMode::Frames(frames) => run_frames(&rom, &config, frames),
        RunMode::Check { suite, max_cycles } => run_check(&rom, &config, suite, max_cycles),
        RunMode::RealTime(duration) => run_real_time(&rom, config, duration),
    }
}

fn run_frames(rom: &[u8], config: &GameBoyConfig, frames: u32) -> Result<Report> {
    let mut gb = GameBoy::new(rom, config).context("failed to load cartridge")?;
    for _ in 0..frames {
        gb.step_frame();
    }
    Ok(report(&gb, None))
}

fn run_check(rom: &[u8], config: &GameBoyConfig, suite: Suite, max_cycles: u64) -> Result<Report> {
    let mut gb = GameBoy::new(rom, config).context("failed to load cartridge")?;
    let verdict = gb.run_until_verdict(suite.checker(), max_cycles);
    log::info!(
        "{:?} after {} cycles ({:?} protocol)",
        verdict,
        gb.total_cycles(),
        suite
    );
    Ok(report(&gb, Some(verdict)))
}

fn run_real_time(rom: &[u8], config: GameBoyConfig, duration: Duration) -> Result<Report> {
    let mut app = GameBoyApp::new(rom, config).context("failed to load cartridge")?;
    app.run_with_new_thread()
        .context("failed to start the emulation thread")?;

    // Report speed roughly once a second while the machine runs.
    let mut remaining = duration;
    while !remaining.is_zero() {
        let slice = remaining.min(Duration::from_secs(1));
        thread::sleep(slice);
        remaining -= slice;
        let speed = app.speed();
        log::debug!(
            "{} instr/s, {:.2}x",
            speed.instructions_per_second,
            speed.speed_ratio()
        );
    }

    app.stop();
    let gb = app
        .machine()
        .context("emulation thread did not hand the machine back")?;
    Ok(report(gb, None))
}

fn report(gb: &GameBoy, verdict: Option<Verdict>) -> Report {
    let snapshot = gb.frame_buffer().snapshot();
    Report {
        title: gb.header().title.clone(),
        verdict,
        frames: snapshot.frame,
        serial: gb.serial_output(),
        pixels: snapshot.pixels,
    }
}
