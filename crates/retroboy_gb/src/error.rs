use std::io;

use thiserror::Error;

/// Errors raised while bringing up a Game Boy machine.
///
/// Everything that can go wrong once a machine is running is tolerated the
/// way the hardware tolerates it (open-bus reads, dropped writes), so these
/// only cover malformed input.
#[derive(Debug, Error)]
pub enum GbError {
    #[error("ROM image is {len} bytes, smaller than the 0x150-byte cartridge header")]
    RomTooSmall { len: usize },

    #[error("unsupported cartridge type 0x{0:02X}")]
    UnsupportedCartridgeType(u8),

    #[error("invalid ROM size code 0x{0:02X}")]
    InvalidRomSize(u8),

    #[error("invalid RAM size code 0x{0:02X}")]
    InvalidRamSize(u8),

    #[error("failed to read ROM image")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GbError>;
