use super::super::{Bus, Cpu};

/// Lowest-numbered pending interrupt, i.e. the one with highest priority
/// (VBlank > STAT > Timer > Serial > Joypad).
#[inline]
pub(super) fn highest_priority(pending: u8) -> Option<u8> {
    let pending = pending & 0x1F;
    (pending != 0).then(|| pending.trailing_zeros() as u8)
}

impl Cpu {
    /// Whether a maskable interrupt is taken at this step boundary.
    #[inline]
    pub(in crate::cpu) fn interrupt_ready<B: Bus>(&self, bus: &B) -> bool {
        self.ime && bus.pending_interrupts() != 0
    }

    /// Pick the interrupt to dispatch once the high byte of PC is on the
    /// stack but before the low byte is written.
    ///
    /// When SP points at 0x0000 the high-byte push lands on IE (0xFFFF) and
    /// can cancel or retarget the dispatch. The low-byte push comes too late
    /// to matter.
    pub(in crate::cpu) fn select_interrupt_after_high_push<B: Bus>(
        &self,
        bus: &B,
    ) -> Option<u8> {
        highest_priority(bus.pending_interrupts())
    }
}
