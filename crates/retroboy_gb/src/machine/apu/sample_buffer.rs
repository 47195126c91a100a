use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Bounded ring of interleaved stereo `i16` samples shared between the
/// emulation thread (producer) and an audio consumer.
///
/// When full, the oldest samples are dropped. A consumer that drains faster
/// than samples are produced gets silence instead of blocking.
#[derive(Clone, Debug)]
pub struct SampleBuffer(Arc<Mutex<Ring>>);

#[derive(Debug)]
struct Ring {
    samples: VecDeque<i16>,
    capacity: usize,
}

impl SampleBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self(Arc::new(Mutex::new(Ring {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        })))
    }

    pub(super) fn push_frame(&self, left: i16, right: i16) {
        let mut ring = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        while ring.samples.len() + 2 > ring.capacity {
            ring.samples.pop_front();
        }
        ring.samples.push_back(left);
        ring.samples.push_back(right);
    }

    /// Fill `out` with queued samples, padding with silence once the queue
    /// runs dry. Returns how many real samples were copied.
    pub fn fill(&self, out: &mut [i16]) -> usize {
        let mut ring = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        let available = ring.samples.len().min(out.len());
        for (dst, src) in out.iter_mut().zip(ring.samples.drain(..available)) {
            *dst = src;
        }
        out[available..].fill(0);
        available
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_pads_with_silence() {
        let buffer = SampleBuffer::new(16);
        buffer.push_frame(100, -100);

        let mut out = [7i16; 6];
        assert_eq!(buffer.fill(&mut out), 2);
        assert_eq!(out, [100, -100, 0, 0, 0, 0]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn overflow_drops_oldest() {
        let buffer = SampleBuffer::new(4);
        buffer.push_frame(1, 1);
        buffer.push_frame(2, 2);
        buffer.push_frame(3, 3);

        let mut out = [0i16; 4];
        assert_eq!(buffer.fill(&mut out), 4);
        assert_eq!(out, [2, 2, 3, 3]);
    }

    #[test]
    fn clones_share_one_queue() {
        let producer = SampleBuffer::new(8);
        let consumer = producer.clone();
        let handle = std::thread::spawn(move || {
            for i in 0..3 {
                producer.push_frame(i, -i);
            }
        });
        handle.join().unwrap();
        assert_eq!(consumer.len(), 6);
    }
}
