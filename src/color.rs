//! Colour type used by the raster surface.
//!
//! Everything the decoder produces is an opaque palette colour, so the
//! surface only ever stores straight (non-premultiplied) RGBA8 pixels.

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components, non-premultiplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::new_opaque(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::new_opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build an opaque colour from a packed `0xRRGGBB` value.
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self::new_opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Packed `0xRRGGBB` value, alpha dropped.
    pub const fn to_rgb24(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Exact RGB comparison; alpha is ignored.
    pub fn rgb_eq(&self, other: &Rgba8) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// RGB comparison where every channel may differ by at most `tolerance`.
    pub fn rgb_within(&self, other: &Rgba8, tolerance: u8) -> bool {
        self.r.abs_diff(other.r) <= tolerance
            && self.g.abs_diff(other.g) <= tolerance
            && self.b.abs_diff(other.b) <= tolerance
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb24_round_trip() {
        let c = Rgba8::from_rgb24(0xAA5500);
        assert_eq!(c, Rgba8::new(0xAA, 0x55, 0x00, 255));
        assert_eq!(c.to_rgb24(), 0xAA5500);
    }

    #[test]
    fn test_rgb_eq_ignores_alpha() {
        let a = Rgba8::new(1, 2, 3, 0);
        let b = Rgba8::new(1, 2, 3, 255);
        assert!(a.rgb_eq(&b));
        assert!(!a.rgb_eq(&Rgba8::new(1, 2, 4, 0)));
    }

    #[test]
    fn test_rgb_within_tolerance() {
        let base = Rgba8::new_opaque(100, 100, 100);
        assert!(base.rgb_within(&Rgba8::new_opaque(101, 99, 100), 1));
        assert!(!base.rgb_within(&Rgba8::new_opaque(102, 100, 100), 1));
        assert!(base.rgb_within(&Rgba8::new_opaque(102, 100, 100), 2));
    }

    #[test]
    fn test_array_conversions() {
        let c = Rgba8::from([9, 8, 7, 6]);
        assert_eq!(c.to_array(), [9, 8, 7, 6]);
        assert!(!c.is_opaque());
        assert!(Rgba8::WHITE.is_opaque());
    }
}
