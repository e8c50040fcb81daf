//! Northern-lights plasma.
//!
//! Each colour channel is the product of two sine waves, one running along x
//! and one along y, each with its own phase and spatial scale. The channels
//! drift at different rates so the colours slide past each other.

use super::sine::sine;
use super::Effect;
use crate::devices::framebuffer::color::{BLUE_MASK, GREEN_MASK, RED_MASK};
use crate::devices::framebuffer::Color565;

/// One value per colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Channels<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> Channels<T> {
    pub const fn new(red: T, green: T, blue: T) -> Self {
        Self { red, green, blue }
    }
}

/// Tuning knobs for the plasma. The defaults are the badge look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlasmaParams {
    /// Phase added per pixel step, per channel.
    pub scale: Channels<u32>,
    /// Phase added per frame, per channel.
    pub step: Channels<u32>,
    /// Starting phases.
    pub start: Channels<u32>,
    /// Right shift applied to `phase + coord * scale` before the sine lookup.
    /// Larger values stretch the waves.
    pub coord_shift: u32,
    /// Right shift applied to the product of the two sines. Larger values
    /// darken the output.
    pub product_shift: u32,
}

impl PlasmaParams {
    pub const NORTHERN_LIGHTS: PlasmaParams = PlasmaParams {
        scale: Channels::new(1, 2, 5),
        step: Channels::new(11, 7, 5),
        start: Channels::new(555, 666, 777),
        coord_shift: 4,
        product_shift: 7,
    };
}

impl Default for PlasmaParams {
    fn default() -> Self {
        Self::NORTHERN_LIGHTS
    }
}

/// Plasma generator and its animation phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plasma {
    params: PlasmaParams,
    phase: Channels<u32>,
}

impl Plasma {
    pub fn new(params: PlasmaParams) -> Self {
        Self {
            phase: params.start,
            params,
        }
    }

    pub fn params(&self) -> &PlasmaParams {
        &self.params
    }

    pub fn phase(&self) -> Channels<u32> {
        self.phase
    }

    /// Unmasked channel intensity: `sin(x wave) * sin(y wave) >> product_shift`.
    ///
    /// Shifts of 32 or more behave as if the bits were shifted out one at a
    /// time: coordinates collapse to phase 0 and the product to its sign.
    #[inline]
    pub fn channel(&self, phase: u32, scale: u32, x: u32, y: u32) -> i32 {
        let along_x = sine(self.wave(phase, x.wrapping_mul(scale)));
        let along_y = sine(self.wave(phase, y.wrapping_mul(scale)));
        let product = i32::from(along_x) * i32::from(along_y);
        match product.checked_shr(self.params.product_shift) {
            Some(v) => v,
            None => product >> 31,
        }
    }

    fn wave(&self, phase: u32, offset: u32) -> i64 {
        let position = phase.wrapping_add(offset);
        i64::from(position.checked_shr(self.params.coord_shift).unwrap_or(0))
    }

    /// Colour at `(x, y)` for the current phase.
    pub fn color_at(&self, x: u32, y: u32) -> Color565 {
        let Channels { red, green, blue } = self.params.scale;
        let r = self.channel(self.phase.red, red, x, y);
        let g = self.channel(self.phase.green, green, x, y);
        let b = self.channel(self.phase.blue, blue, x, y);
        // Out-of-range values wrap through the mask rather than clamp.
        Color565::pack(
            r as u16 & RED_MASK,
            g as u16 & GREEN_MASK,
            b as u16 & BLUE_MASK,
        )
    }
}

impl Default for Plasma {
    fn default() -> Self {
        Self::new(PlasmaParams::NORTHERN_LIGHTS)
    }
}

impl Effect for Plasma {
    fn name(&self) -> &'static str {
        "Northern Lights"
    }

    fn pixel(&self, x: u32, y: u32) -> Color565 {
        self.color_at(x, y)
    }

    fn advance(&mut self) {
        let step = self.params.step;
        self.phase.red = self.phase.red.wrapping_add(step.red);
        self.phase.green = self.phase.green.wrapping_add(step.green);
        self.phase.blue = self.phase.blue.wrapping_add(step.blue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_first_pixel() {
        let plasma = Plasma::default();
        let pixel = plasma.color_at(0, 0);
        assert_eq!(pixel.raw(), 0x2B2A);
        assert_eq!((pixel.r(), pixel.g(), pixel.b()), (5, 25, 10));
    }

    #[test]
    fn golden_pixels_across_the_frame() {
        let plasma = Plasma::default();
        assert_eq!(plasma.color_at(1, 0).raw(), 0x2B2A);
        assert_eq!(plasma.color_at(2, 0).raw(), 0x2B2B);
        assert_eq!(plasma.color_at(3, 0).raw(), 0x2B4B);
        assert_eq!(plasma.color_at(7, 3).raw(), 0x336D);
        assert_eq!(plasma.color_at(15, 15).raw(), 0x43D4);
    }

    #[test]
    fn unmasked_channels_exceed_their_fields() {
        // sin(34)^2 >> 7 == 69, which only fits 5 bits after masking
        let plasma = Plasma::default();
        assert_eq!(plasma.channel(555, 1, 0, 0), 69);
        assert_eq!(plasma.channel(666, 2, 0, 0), 89);
        assert_eq!(plasma.channel(777, 5, 0, 0), 106);
    }

    #[test]
    fn advance_steps_each_channel() {
        let mut plasma = Plasma::default();
        plasma.advance();
        assert_eq!(plasma.phase(), Channels::new(566, 673, 782));
        assert_eq!(plasma.color_at(0, 0).raw(), 0x436A);
    }

    #[test]
    fn phase_wraps_at_u32() {
        let mut plasma = Plasma::new(PlasmaParams {
            start: Channels::new(u32::MAX - 5, u32::MAX, 0),
            ..PlasmaParams::default()
        });
        plasma.advance();
        assert_eq!(plasma.phase(), Channels::new(5, 6, 5));
    }

    #[test]
    fn oversized_shifts_saturate() {
        let flat = Plasma::new(PlasmaParams {
            coord_shift: 32,
            ..PlasmaParams::default()
        });
        // every wave reads sine(0) == 0
        assert_eq!(flat.channel(555, 1, 7, 3), 0);
        assert_eq!(flat.color_at(0, 0), Color565::BLACK);
        assert_eq!(flat.params().coord_shift, 32);

        for shift in [31, 32, 40, u32::MAX] {
            let dark = Plasma::new(PlasmaParams {
                product_shift: shift,
                ..PlasmaParams::default()
            });
            // sin(34)^2 is positive, so only the sign survives
            assert_eq!(dark.channel(555, 1, 0, 0), 0);
            // sin(162) * sin(34) is negative
            assert_eq!(dark.channel(544, 2048, 1, 0), -1);
        }
    }

    #[test]
    fn symmetric_in_x_and_y() {
        let plasma = Plasma::default();
        for (x, y) in [(0, 5), (3, 11), (19, 13)] {
            assert_eq!(plasma.color_at(x, y), plasma.color_at(y, x));
        }
    }
}
