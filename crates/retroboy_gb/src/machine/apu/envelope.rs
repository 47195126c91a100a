/// Volume envelope (NRx2), clocked at 64 Hz.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Envelope {
    initial: u8,
    period: u8,
    add: bool,
    volume: u8,
    timer: u8,
}

impl Envelope {
    pub(super) fn write(&mut self, value: u8) {
        self.initial = value >> 4;
        self.add = value & 0x08 != 0;
        self.period = value & 0x07;
    }

    pub(super) fn trigger(&mut self) {
        self.volume = self.initial;
        self.timer = self.period;
    }

    pub(super) fn volume(&self) -> u8 {
        self.volume
    }

    pub(super) fn clock(&mut self) {
        // Period 0 freezes the volume.
        if self.period == 0 {
            return;
        }
        self.timer = self.timer.saturating_sub(1);
        if self.timer != 0 {
            return;
        }
        self.timer = self.period;
        if self.add && self.volume < 15 {
            self.volume += 1;
        } else if !self.add && self.volume > 0 {
            self.volume -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Envelope;

    #[test]
    fn decreases_once_per_period() {
        let mut env = Envelope::default();
        env.write(0xF2);
        env.trigger();
        assert_eq!(env.volume(), 15);
        env.clock();
        assert_eq!(env.volume(), 15);
        env.clock();
        assert_eq!(env.volume(), 14);
    }

    #[test]
    fn saturates_at_fifteen() {
        let mut env = Envelope::default();
        env.write(0xE9);
        env.trigger();
        for _ in 0..5 {
            env.clock();
        }
        assert_eq!(env.volume(), 15);
    }

    #[test]
    fn zero_period_holds_volume() {
        let mut env = Envelope::default();
        env.write(0x80);
        env.trigger();
        for _ in 0..16 {
            env.clock();
        }
        assert_eq!(env.volume(), 8);
    }
}
