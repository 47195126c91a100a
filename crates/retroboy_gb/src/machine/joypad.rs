use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use super::InterruptFlags;

/// The eight DMG buttons.
///
/// The discriminant is the bit in the pressed mask: the low nibble holds
/// the action buttons and the high nibble the d-pad, each in P1 line order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Button {
    A = 0,
    B = 1,
    Select = 2,
    Start = 3,
    Right = 4,
    Left = 5,
    Up = 6,
    Down = 7,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
    ];

    #[inline]
    pub(crate) fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Pressed-button mask written by any thread and latched by the machine at
/// instruction boundaries.
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState(Arc<AtomicU8>);

impl InputState {
    pub(crate) fn set(&self, button: Button, pressed: bool) {
        if pressed {
            self.0.fetch_or(button.mask(), Ordering::AcqRel);
        } else {
            self.0.fetch_and(!button.mask(), Ordering::AcqRel);
        }
    }

    fn load(&self) -> u8 {
        self.0.load(Ordering::Acquire)
    }
}

/// P1/JOYP (0xFF00).
pub(super) struct Joypad {
    /// Select bits 5 (buttons) and 4 (d-pad); 0 selects.
    select: u8,
    /// Latched pressed mask, bit = 1 means pressed.
    pressed: u8,
    input: InputState,
}

impl Joypad {
    pub(super) fn new(input: InputState) -> Self {
        Self {
            select: 0x30,
            pressed: 0,
            input,
        }
    }

    /// Selected input lines, active low.
    fn lines(&self) -> u8 {
        let mut low = 0x0F;
        if self.select & 0x10 == 0 {
            low &= !(self.pressed >> 4);
        }
        if self.select & 0x20 == 0 {
            low &= !self.pressed;
        }
        low & 0x0F
    }

    pub(super) fn read(&self) -> u8 {
        // Bits 7-6 always read as 1 on DMG.
        0xC0 | self.select | self.lines()
    }

    pub(super) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Pick up the shared pressed mask. A selected line going low raises
    /// the joypad interrupt.
    pub(super) fn latch_input(&mut self, iflags: &mut InterruptFlags) {
        let pressed = self.input.load();
        if pressed == self.pressed {
            return;
        }
        let before = self.lines();
        self.pressed = pressed;
        let after = self.lines();
        if before & !after != 0 {
            *iflags |= InterruptFlags::JOYPAD;
        }
    }
}
