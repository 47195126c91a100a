/// Channel 1 frequency sweep (NR10), clocked at 128 Hz.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Sweep {
    period: u8,
    negate: bool,
    shift: u8,
    timer: u8,
    shadow: u16,
    enabled: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum SweepStep {
    Idle,
    /// The channel frequency becomes this value.
    Frequency(u16),
    /// The new frequency passed 2047; the channel turns off.
    Overflow,
}

const MAX_FREQUENCY: u16 = 2047;

impl Sweep {
    pub(super) fn write(&mut self, value: u8) {
        self.period = (value >> 4) & 0x07;
        self.negate = value & 0x08 != 0;
        self.shift = value & 0x07;
    }

    fn reload_timer(&mut self) {
        self.timer = if self.period == 0 { 8 } else { self.period };
    }

    fn next_frequency(&self) -> u16 {
        let delta = self.shadow >> self.shift;
        if self.negate {
            self.shadow.wrapping_sub(delta)
        } else {
            self.shadow + delta
        }
    }

    /// Latch the shadow frequency on trigger. Returns `false` when the
    /// immediate overflow check disables the channel.
    pub(super) fn trigger(&mut self, frequency: u16) -> bool {
        self.shadow = frequency;
        self.reload_timer();
        self.enabled = self.period != 0 || self.shift != 0;
        !(self.shift != 0 && self.next_frequency() > MAX_FREQUENCY)
    }

    pub(super) fn clock(&mut self) -> SweepStep {
        self.timer = self.timer.saturating_sub(1);
        if self.timer != 0 {
            return SweepStep::Idle;
        }
        self.reload_timer();
        if !self.enabled || self.period == 0 {
            return SweepStep::Idle;
        }

        let frequency = self.next_frequency();
        if frequency > MAX_FREQUENCY {
            return SweepStep::Overflow;
        }
        if self.shift == 0 {
            return SweepStep::Idle;
        }
        self.shadow = frequency;
        // A second overflow check runs against the updated shadow.
        if self.next_frequency() > MAX_FREQUENCY {
            return SweepStep::Overflow;
        }
        SweepStep::Frequency(frequency)
    }
}
