#![forbid(unsafe_code)]

//! Highlight colour marker.

/// A compact RGBA colour, the default highlight marker.
///
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
///
/// Host toolkits usually hand colours around as `0xAARRGGBB` integers, often
/// with the alpha byte left at zero for opaque colours. Use
/// [`Rgba::from_argb`] for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque RGB colour (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// From a `0xAARRGGBB` integer. A zero alpha byte means opaque, so
    /// `0xffffff` is white.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        let a = (argb >> 24) as u8;
        let a = if a == 0 { 255 } else { a };
        Self::rgba((argb >> 16) as u8, (argb >> 8) as u8, argb as u8, a)
    }

    /// Back to a `0xAARRGGBB` integer.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a() as u32) << 24) | (self.0 >> 8)
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
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a() == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r(),
                self.g(),
                self.b(),
                self.a()
            )
        }
    }
}
