use bitflags::bitflags;

bitflags! {
    /// Interrupt request bits as laid out in IF (0xFF0F) and IE (0xFFFF).
    ///
    /// Components raise requests by OR-ing into the flags handed to their
    /// tick functions; only the CPU clears them, one at a time, on dispatch.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// The five interrupt sources, in priority order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Interrupt {
    VBlank = 0,
    Stat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::VBlank),
            1 => Some(Self::Stat),
            2 => Some(Self::Timer),
            3 => Some(Self::Serial),
            4 => Some(Self::Joypad),
            _ => None,
        }
    }

    /// Handler address: 0x40, 0x48, 0x50, 0x58, 0x60.
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }
}

impl From<Interrupt> for InterruptFlags {
    fn from(interrupt: Interrupt) -> Self {
        Self::from_bits_truncate(1 << interrupt as u8)
    }
}
