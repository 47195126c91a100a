use super::super::Cpu;

impl Cpu {
    /// Advance the EI delay at the end of a step.
    ///
    /// The step that executed EI only arms the delay; IME turns on at the
    /// end of the following step, so that instruction always runs before
    /// an interrupt can be taken.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
