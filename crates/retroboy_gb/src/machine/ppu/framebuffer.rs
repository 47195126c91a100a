use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Bytes in one RGBA frame.
pub(crate) const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 4;

#[derive(Debug)]
struct Shared {
    front: Mutex<Vec<u8>>,
    frame: AtomicU64,
}

/// Double-buffered RGBA output shared between the PPU and readers.
///
/// The PPU renders into a private back buffer and swaps it with the front
/// buffer under the lock when VBlank starts, so a reader always copies one
/// whole frame.
#[derive(Clone, Debug)]
pub struct FrameBuffer(Arc<Shared>);

/// A copy of the most recently published frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameSnapshot {
    /// 160×144 RGBA pixels, row-major.
    pub pixels: Vec<u8>,
    /// Number of frames published before this one was taken. Zero means no
    /// frame has been completed yet.
    pub frame: u64,
}

impl FrameBuffer {
    pub(crate) fn new(fill: [u8; 4]) -> Self {
        Self(Arc::new(Shared {
            front: Mutex::new(fill.repeat(SCREEN_WIDTH * SCREEN_HEIGHT)),
            frame: AtomicU64::new(0),
        }))
    }

    pub fn frame_number(&self) -> u64 {
        self.0.frame.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let front = self.0.front.lock().unwrap_or_else(PoisonError::into_inner);
        FrameSnapshot {
            pixels: front.clone(),
            frame: self.frame_number(),
        }
    }

    /// Copy the front buffer into `dst` (at most `FRAME_BYTES` bytes) and
    /// return its frame number.
    pub fn copy_into(&self, dst: &mut [u8]) -> u64 {
        let front = self.0.front.lock().unwrap_or_else(PoisonError::into_inner);
        let len = dst.len().min(front.len());
        dst[..len].copy_from_slice(&front[..len]);
        self.frame_number()
    }

    /// Swap a completed back buffer in as the new front buffer.
    pub(super) fn publish(&self, back: &mut Vec<u8>) {
        debug_assert_eq!(back.len(), FRAME_BYTES);
        let mut front = self.0.front.lock().unwrap_or_else(PoisonError::into_inner);
        mem::swap(&mut *front, back);
        // Bump while still holding the lock so a snapshot never pairs new
        // pixels with an old frame number.
        self.0.frame.fetch_add(1, Ordering::AcqRel);
    }
}
