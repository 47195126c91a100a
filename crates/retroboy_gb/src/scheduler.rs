//! Clock driver: runs a machine step by step, paced against wall-clock time.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::Pacing;
use crate::CPU_FREQUENCY;

const NANOS_PER_SECOND: u128 = 1_000_000_000;
/// Longest single sleep while waiting for wall-clock time to catch up.
const MAX_SLEEP: Duration = Duration::from_millis(1);
/// Steps between checks of the speed-report window.
const STATS_CHECK_INTERVAL: u64 = 1024;

/// Something the scheduler can drive: one call is one indivisible step.
pub trait Clocked {
    /// Run one step and return the T-cycles it took.
    fn step(&mut self) -> u32;
}

/// Throughput measured over the last full wall-clock second.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpeedStats {
    pub instructions_per_second: u64,
    pub cycles_per_second: u64,
}

impl SpeedStats {
    /// Emulation speed relative to real hardware (1.0 = full speed).
    pub fn speed_ratio(&self) -> f64 {
        self.cycles_per_second as f64 / CPU_FREQUENCY as f64
    }
}

#[derive(Debug, Default)]
struct Shared {
    stop: AtomicBool,
    paused: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
    instructions_per_second: AtomicU64,
    cycles_per_second: AtomicU64,
}

/// Cloneable handle for pausing, resuming and stopping a running scheduler
/// from any thread.
#[derive(Clone, Debug, Default)]
pub struct SchedulerControl(Arc<Shared>);

impl SchedulerControl {
    pub fn pause(&self) {
        let _guard = self.0.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.0.paused.store(true, Ordering::Release);
    }

    pub fn resume(&self) {
        {
            let _guard = self.0.lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.0.paused.store(false, Ordering::Release);
        }
        self.0.wake.notify_all();
    }

    /// Ask the run loop to return. Checked once per step.
    pub fn request_stop(&self) {
        {
            let _guard = self.0.lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.0.stop.store(true, Ordering::Release);
        }
        self.0.wake.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.0.paused.load(Ordering::Acquire)
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.stop.load(Ordering::Acquire)
    }

    pub fn speed(&self) -> SpeedStats {
        SpeedStats {
            instructions_per_second: self.0.instructions_per_second.load(Ordering::Relaxed),
            cycles_per_second: self.0.cycles_per_second.load(Ordering::Relaxed),
        }
    }

    /// Clear a previous stop request so the loop can run again.
    pub(crate) fn rearm(&self) {
        self.0.stop.store(false, Ordering::Release);
    }

    /// Block while paused. Returns `false` once a stop was requested.
    fn wait_while_paused(&self) -> bool {
        let guard = self.0.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _guard = self
            .0
            .wake
            .wait_while(guard, |_| self.is_paused() && !self.is_stop_requested())
            .unwrap_or_else(PoisonError::into_inner);
        !self.is_stop_requested()
    }

    fn publish(&self, stats: SpeedStats) {
        self.0
            .instructions_per_second
            .store(stats.instructions_per_second, Ordering::Relaxed);
        self.0
            .cycles_per_second
            .store(stats.cycles_per_second, Ordering::Relaxed);
    }
}

/// Counts steps and cycles, publishing a [`SpeedStats`] once per second.
struct SpeedMeter {
    window_start: Instant,
    steps: u64,
    cycles: u64,
}

impl SpeedMeter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            steps: 0,
            cycles: 0,
        }
    }

    fn record(&mut self, cycles: u32, control: &SchedulerControl) {
        self.steps += 1;
        self.cycles += u64::from(cycles);
        if self.steps % STATS_CHECK_INTERVAL != 0 {
            return;
        }

        let elapsed = self.window_start.elapsed();
        if elapsed < Duration::from_secs(1) {
            return;
        }
        let nanos = elapsed.as_nanos().max(1);
        let stats = SpeedStats {
            instructions_per_second: (u128::from(self.steps) * NANOS_PER_SECOND / nanos) as u64,
            cycles_per_second: (u128::from(self.cycles) * NANOS_PER_SECOND / nanos) as u64,
        };
        control.publish(stats);
        log::info!(
            "GB scheduler: {} instr/s, {} cycles/s ({:.1}% speed)",
            stats.instructions_per_second,
            stats.cycles_per_second,
            stats.speed_ratio() * 100.0
        );

        self.window_start = Instant::now();
        self.steps = 0;
        self.cycles = 0;
    }
}

/// Drives a [`Clocked`] machine until stopped.
///
/// In [`Pacing::RealTime`] the scheduler keeps a running total of emulated
/// nanoseconds (T-cycles at 4,194,304 Hz) and sleeps whenever it gets ahead
/// of the wall clock. [`Pacing::Unthrottled`] never sleeps.
#[derive(Debug)]
pub struct Scheduler {
    pacing: Pacing,
    control: SchedulerControl,
}

impl Scheduler {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            control: SchedulerControl::default(),
        }
    }

    pub fn control(&self) -> SchedulerControl {
        self.control.clone()
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Run `machine` on the calling thread until a stop is requested.
    pub fn run<M: Clocked>(&self, machine: &mut M) {
        log::info!("GB scheduler: started ({:?})", self.pacing);
        let control = &self.control;
        let mut meter = SpeedMeter::new();

        while control.wait_while_paused() {
            // Pacing restarts from "now" after every pause.
            let origin = Instant::now();
            let mut cycles: u64 = 0;

            while !control.is_stop_requested() && !control.is_paused() {
                if self.pacing == Pacing::RealTime {
                    let emulated = u128::from(cycles) * NANOS_PER_SECOND / u128::from(CPU_FREQUENCY);
                    let real = origin.elapsed().as_nanos();
                    if real < emulated {
                        let ahead = Duration::from_nanos((emulated - real) as u64);
                        thread::sleep(ahead.min(MAX_SLEEP));
                        continue;
                    }
                }

                let taken = machine.step();
                cycles += u64::from(taken);
                meter.record(taken, control);
            }
        }
        log::info!("GB scheduler: stopped");
    }

    /// Move `machine` onto a new thread and run it there. Joining the
    /// handle after [`SchedulerControl::request_stop`] gives the machine
    /// back.
    pub fn spawn<M>(&self, mut machine: M) -> std::io::Result<JoinHandle<M>>
    where
        M: Clocked + Send + 'static,
    {
        let scheduler = Self {
            pacing: self.pacing,
            control: self.control.clone(),
        };
        thread::Builder::new()
            .name("gb-emulation".into())
            .spawn(move || {
                scheduler.run(&mut machine);
                machine
            })
    }
}
