//! RGB565 packed pixels
use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics_core::pixelcolor::{Rgb565, Rgb888};

pub const RED_BITS: u32 = 5;
pub const GREEN_BITS: u32 = 6;
pub const BLUE_BITS: u32 = 5;

pub const RED_MASK: u16 = (1 << RED_BITS) - 1;
pub const GREEN_MASK: u16 = (1 << GREEN_BITS) - 1;
pub const BLUE_MASK: u16 = (1 << BLUE_BITS) - 1;

const RED_SHIFT: u32 = GREEN_BITS + BLUE_BITS;
const GREEN_SHIFT: u32 = BLUE_BITS;

/// A 16-bit pixel: red in bits 15..11, green in 10..5, blue in 4..0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color565(u16);

impl Color565 {
    pub const BLACK: Color565 = Color565(0x0000);
    pub const RED: Color565 = Color565(0xF800);
    pub const ORANGE: Color565 = Color565(0xF300);
    pub const YELLOW: Color565 = Color565(0xF5E0);
    pub const GREEN: Color565 = Color565(0x07C0);
    pub const CYAN: Color565 = Color565(0x07FF);
    pub const BLUE: Color565 = Color565(0x001F);
    pub const PURPLE: Color565 = Color565(0x7817);
    pub const WHITE: Color565 = Color565(0xFFFF);

    /// The eight colours the rainbow demo cycles through, in order.
    pub const RAINBOW: [Color565; 8] = [
        Color565::RED,
        Color565::ORANGE,
        Color565::YELLOW,
        Color565::GREEN,
        Color565::CYAN,
        Color565::BLUE,
        Color565::PURPLE,
        Color565::WHITE,
    ];

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Pack three channel values. Each value is masked to its field width
    /// first, so out-of-range input wraps instead of bleeding into the
    /// neighbouring field.
    pub const fn pack(r: u16, g: u16, b: u16) -> Self {
        Self(((r & RED_MASK) << RED_SHIFT) | ((g & GREEN_MASK) << GREEN_SHIFT) | (b & BLUE_MASK))
    }

    /// Truncate 8-bit channels down to 5/6/5 bits.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::pack((r >> 3) as u16, (g >> 2) as u16, (b >> 3) as u16)
    }

    pub const fn r(self) -> u8 {
        ((self.0 >> RED_SHIFT) & RED_MASK) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> GREEN_SHIFT) & GREEN_MASK) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(RawU16::new(self.0))
    }

    /// Widen to 8 bits per channel for 24/32-bit framebuffers.
    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::from(self.to_rgb565())
    }
}

impl From<Rgb565> for Color565 {
    fn from(color: Rgb565) -> Self {
        Self(RawU16::from(color).into_inner())
    }
}

impl From<Color565> for Rgb565 {
    fn from(color: Color565) -> Self {
        color.to_rgb565()
    }
}

impl From<Rgb888> for Color565 {
    fn from(color: Rgb888) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::from_rgb888(color.r(), color.g(), color.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_core::pixelcolor::RgbColor;

    #[test]
    fn pack_places_fields() {
        assert_eq!(Color565::pack(0x1F, 0, 0).raw(), 0xF800);
        assert_eq!(Color565::pack(0, 0x3F, 0).raw(), 0x07E0);
        assert_eq!(Color565::pack(0, 0, 0x1F).raw(), 0x001F);
        assert_eq!(Color565::pack(5, 25, 10).raw(), 0x2B2A);
    }

    #[test]
    fn pack_masks_overflowing_channels() {
        // 69 & 0x1F == 5; the high bits must not reach the green field
        assert_eq!(Color565::pack(69, 0, 0), Color565::pack(5, 0, 0));
        assert_eq!(Color565::pack(0, 89, 0), Color565::pack(0, 25, 0));
        assert_eq!(Color565::pack(0, 0, 0xFFFF).raw(), 0x001F);
    }

    #[test]
    fn channel_accessors_invert_pack() {
        let c = Color565::PURPLE;
        assert_eq!(Color565::pack(c.r() as u16, c.g() as u16, c.b() as u16), c);
    }

    #[test]
    fn from_rgb888_truncates_low_bits() {
        assert_eq!(Color565::from_rgb888(255, 255, 255), Color565::WHITE);
        assert_eq!(Color565::from_rgb888(7, 3, 7), Color565::BLACK);
        assert_eq!(Color565::from_rgb888(0xFF, 0, 0), Color565::RED);
    }

    #[test]
    fn embedded_graphics_roundtrip_keeps_bits() {
        let eg: Rgb565 = Color565::YELLOW.into();
        assert_eq!(Color565::from(eg), Color565::YELLOW);
    }

    #[test]
    fn widening_saturates_full_channels() {
        let white = Color565::WHITE.to_rgb888();
        assert_eq!((white.r(), white.g(), white.b()), (255, 255, 255));
        assert_eq!(Color565::BLACK.to_rgb888(), Rgb888::new(0, 0, 0));
    }
}
