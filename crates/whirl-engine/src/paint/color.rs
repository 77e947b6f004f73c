use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA packed into one `u32`.
///
/// Byte order, most to least significant: red, green, blue, alpha.
/// `0xff0000ff` is opaque red. The fragment shaders unpack with the same
/// shifts, so this layout must not change.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const RED: Self = Self::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Self = Self::rgb(0x00, 0xff, 0x00);
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xff);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0x00);
    pub const CYAN: Self = Self::rgb(0x00, 0xff, 0xff);
    pub const MAGENTA: Self = Self::rgb(0xff, 0x00, 0xff);
    pub const TRANSPARENT: Self = Self::new(0x00, 0x00, 0x00, 0x00);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    #[inline]
    pub const fn from_channels(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// `[r, g, b, a]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xffff_ff00) | a as u32)
    }

    /// Channels normalized to `[0, 1]`, e.g. for a clear color.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        self.channels().map(|c| c as f32 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(c: Color) -> Self {
        c.0
    }
}
