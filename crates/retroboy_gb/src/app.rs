use std::thread::JoinHandle;

use crate::config::GameBoyConfig;
use crate::error::Result;
use crate::machine::{
    Button, FrameBuffer, FrameSnapshot, GameBoy, InputState, SampleBuffer, SerialLog,
};
use crate::scheduler::{Scheduler, SchedulerControl, SpeedStats};

/// Front-end facing wrapper: a [`GameBoy`] plus the [`Scheduler`] that
/// drives it, either on the caller's thread or on a background thread.
///
/// Output handles (frame, samples, serial) and input are shared, so they
/// keep working while the machine runs elsewhere.
pub struct GameBoyApp {
    scheduler: Scheduler,
    /// `None` while the machine lives on the emulation thread.
    machine: Option<GameBoy>,
    thread: Option<JoinHandle<GameBoy>>,
    frame: FrameBuffer,
    samples: SampleBuffer,
    serial: SerialLog,
    input: InputState,
}

impl GameBoyApp {
    pub fn new(rom: &[u8], config: GameBoyConfig) -> Result<Self> {
        let machine = GameBoy::new(rom, &config)?;
        log::info!("Game Boy init: \"{}\"", machine.header().title);
        Ok(Self {
            scheduler: Scheduler::new(config.pacing),
            frame: machine.frame_buffer().clone(),
            samples: machine.sample_buffer().clone(),
            serial: machine.serial_log().clone(),
            input: machine.input().clone(),
            machine: Some(machine),
            thread: None,
        })
    }

    /// Run on the calling thread until [`SchedulerControl::request_stop`]
    /// is called from elsewhere.
    pub fn run(&mut self) {
        let Some(machine) = self.machine.as_mut() else {
            log::warn!("Game Boy: run() while the emulation thread is active");
            return;
        };
        self.scheduler.control().rearm();
        self.scheduler.run(machine);
    }

    /// Move the machine onto a background thread and return immediately.
    pub fn run_with_new_thread(&mut self) -> Result<()> {
        let Some(machine) = self.machine.take() else {
            log::warn!("Game Boy: emulation thread already running");
            return Ok(());
        };
        self.scheduler.control().rearm();
        self.thread = Some(self.scheduler.spawn(machine)?);
        Ok(())
    }

    /// Stop the run loop, join the emulation thread and take the machine
    /// back. Calling it when nothing runs is a no-op.
    pub fn stop(&mut self) {
        self.scheduler.control().request_stop();
        if let Some(handle) = self.thread.take() {
            match handle.join() {
                Ok(machine) => self.machine = Some(machine),
                Err(_) => log::error!("Game Boy: emulation thread panicked"),
            }
        }
    }

    pub fn pause(&self) {
        self.scheduler.control().pause();
    }

    pub fn resume(&self) {
        self.scheduler.control().resume();
    }

    pub fn control(&self) -> SchedulerControl {
        self.scheduler.control()
    }

    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }

    /// The machine, when it is not running on the emulation thread.
    pub fn machine(&self) -> Option<&GameBoy> {
        self.machine.as_ref()
    }

    /// Copy of the most recently completed frame.
    pub fn framebuffer(&self) -> FrameSnapshot {
        self.frame.snapshot()
    }

    /// Drain interleaved stereo samples into `out`; silence pads a short
    /// queue. Returns how many real samples were copied.
    pub fn fill_samples(&self, out: &mut [i16]) -> usize {
        self.samples.fill(out)
    }

    pub fn serial_output(&self) -> Vec<u8> {
        self.serial.snapshot()
    }

    /// Press or release a button from any thread. The emulation thread
    /// applies it at its next CPU step.
    pub fn set_button(&self, button: Button, pressed: bool) {
        log::debug!("Game Boy: {button:?} pressed={pressed}");
        self.input.set(button, pressed);
    }

    pub fn speed(&self) -> SpeedStats {
        self.scheduler.control().speed()
    }
}

impl Drop for GameBoyApp {
    fn drop(&mut self) {
        self.stop();
        log::info!("Game Boy exit");
    }
}
