use typed_builder::TypedBuilder;

/// How the scheduler paces emulation against wall-clock time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Pacing {
    /// Sleep whenever emulated time runs ahead of real time.
    #[default]
    RealTime,
    /// Run as fast as the host allows.
    Unthrottled,
}

/// RGBA shades used for the four DMG colour indices (0 = lightest).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette(pub [[u8; 4]; 4]);

impl Palette {
    /// The greenish shades of the original DMG screen.
    pub const DMG_GREEN: Palette = Palette([
        [153, 161, 120, 255],
        [87, 93, 67, 255],
        [42, 46, 32, 255],
        [10, 10, 2, 255],
    ]);

    pub const GRAYSCALE: Palette = Palette([
        [255, 255, 255, 255],
        [170, 170, 170, 255],
        [85, 85, 85, 255],
        [0, 0, 0, 255],
    ]);

    #[inline]
    pub fn shade(&self, index: u8) -> [u8; 4] {
        self.0[usize::from(index & 0x03)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DMG_GREEN
    }
}

/// Machine-wide configuration.
///
/// ```
/// use retroboy_gb::{GameBoyConfig, Pacing};
///
/// let config = GameBoyConfig::builder().pacing(Pacing::Unthrottled).build();
/// assert_eq!(config.sample_buffer_capacity, 65535);
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct GameBoyConfig {
    #[builder(default)]
    pub pacing: Pacing,
    /// Ring capacity in samples (one stereo pair is two samples).
    #[builder(default = 65535)]
    pub sample_buffer_capacity: usize,
    #[builder(default)]
    pub palette: Palette,
    /// Fill WRAM/HRAM with a fixed-seed pseudo-random pattern at power-on.
    #[builder(default = true)]
    pub randomize_internal_ram: bool,
}

impl Default for GameBoyConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
