/// Length counter shared by all four channels. When enabled it counts down
/// at 256 Hz and silences the channel on reaching zero.
#[derive(Clone, Copy, Debug)]
pub(super) struct LengthCounter {
    counter: u16,
    enabled: bool,
    max: u16,
}

impl LengthCounter {
    pub(super) fn new(max: u16) -> Self {
        Self {
            counter: 0,
            enabled: false,
            max,
        }
    }

    /// NRx1 length load: the counter runs `max - value` ticks.
    pub(super) fn load(&mut self, value: u8) {
        self.counter = self.max - (u16::from(value) & (self.max - 1));
    }

    pub(super) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(super) fn trigger(&mut self) {
        if self.counter == 0 {
            self.counter = self.max;
        }
    }

    /// Returns `true` when the counter just expired.
    pub(super) fn clock(&mut self) -> bool {
        if !self.enabled || self.counter == 0 {
            return false;
        }
        self.counter -= 1;
        self.counter == 0
    }
}
