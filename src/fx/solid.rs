//! Whole-screen colour cycling, one palette entry per frame.

use super::Effect;
use crate::devices::framebuffer::{Color565, Resolution};
use crate::error::FxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidFill {
    palette: &'static [Color565],
    counter: u64,
}

impl SolidFill {
    pub fn new(palette: &'static [Color565]) -> Result<Self, FxError> {
        if palette.is_empty() {
            return Err(FxError::EmptyPalette);
        }
        Ok(Self { palette, counter: 0 })
    }

    pub fn rainbow() -> Self {
        Self {
            palette: &Color565::RAINBOW,
            counter: 0,
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn current(&self) -> Color565 {
        let len = self.palette.len() as u64;
        self.palette[(self.counter % len) as usize]
    }
}

impl Effect for SolidFill {
    fn name(&self) -> &'static str {
        "Rainbow"
    }

    fn pixel(&self, _x: u32, _y: u32) -> Color565 {
        self.current()
    }

    fn advance(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }

    /// Fills the padding too, so the whole buffer is one colour.
    fn render(&self, frame: &mut [Color565], resolution: Resolution) {
        let len = resolution.len().min(frame.len());
        frame[..len].fill(self.current());
    }
}
