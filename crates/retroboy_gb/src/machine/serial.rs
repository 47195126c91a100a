use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use super::InterruptFlags;

/// T-cycles per transferred bit with the internal 8192 Hz clock.
const TCYCLES_PER_BIT: u32 = 512;
/// Bytes kept by [`SerialLog`]; older output is dropped.
const LOG_CAPACITY: usize = 64 * 1024;
/// Longest line buffered for logging before it is flushed unterminated.
const MAX_LINE: usize = 256;

#[derive(Debug, Default)]
struct LogState {
    bytes: VecDeque<u8>,
    /// Every byte ever pushed, including dropped ones.
    total: u64,
}

/// Bytes shifted out over the link port, shared with other threads.
///
/// Test ROMs print their results this way, so a foreground thread can keep
/// a clone and watch it while the machine runs elsewhere. Only the most
/// recent 64 KiB are retained.
#[derive(Clone, Debug, Default)]
pub struct SerialLog(Arc<Mutex<LogState>>);

impl SerialLog {
    /// The retained output, oldest byte first.
    pub fn snapshot(&self) -> Vec<u8> {
        let state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        state.bytes.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes written since power-on, including any no longer
    /// retained.
    pub fn total_written(&self) -> u64 {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).total
    }

    fn push(&self, byte: u8) {
        let mut state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if state.bytes.len() == LOG_CAPACITY {
            state.bytes.pop_front();
        }
        state.bytes.push_back(byte);
        state.total += 1;
    }
}

/// Serial port (SB/SC) with no link partner attached.
///
/// A transfer started with the internal clock shifts SB out over eight bit
/// periods and shifts in 1s, so SB reads 0xFF afterwards.
pub(super) struct Serial {
    sb: u8,
    /// SC bits 7 (transfer active) and 0 (clock select).
    sc: u8,
    /// T-cycles until the running transfer completes.
    remaining: u32,
    log: SerialLog,
    line: Vec<u8>,
}

impl Serial {
    pub(super) fn new(log: SerialLog) -> Self {
        Self {
            sb: 0x00,
            sc: 0x00,
            remaining: 0,
            log,
            line: Vec::new(),
        }
    }

    pub(super) fn log(&self) -> &SerialLog {
        &self.log
    }

    pub(super) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF01 => self.sb,
            _ => self.sc | 0x7E,
        }
    }

    pub(super) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF01 => self.sb = value,
            _ => {
                self.sc = value & 0x81;
                // Only the internal clock drives a transfer without a partner.
                self.remaining = if self.sc == 0x81 {
                    8 * TCYCLES_PER_BIT
                } else {
                    0
                };
            }
        }
    }

    pub(super) fn tick_tcycle(&mut self, iflags: &mut InterruptFlags) {
        if self.remaining == 0 {
            return;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.complete_transfer(iflags);
        }
    }

    fn complete_transfer(&mut self, iflags: &mut InterruptFlags) {
        let byte = self.sb;
        self.log.push(byte);
        self.sb = 0xFF;
        self.sc &= !0x80;
        *iflags |= InterruptFlags::SERIAL;

        if byte == b'\n' {
            self.flush_line();
        } else {
            self.line.push(byte);
            if self.line.len() == MAX_LINE {
                self.flush_line();
            }
        }
    }

    fn flush_line(&mut self) {
        log::info!("GB serial: {}", String::from_utf8_lossy(&self.line));
        self.line.clear();
    }
}
