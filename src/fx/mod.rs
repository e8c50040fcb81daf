//! # Effects
//!
//! Pixel generators. An effect is a pure function of pixel coordinate and
//! its own animation phase; the phase only moves when the frame loop calls
//! [`Effect::advance`] between frames.
//!
//! - `sine`: 256-entry fixed-point sine table
//! - `plasma`: per-channel sine interference ("northern lights")
//! - `solid`: whole-screen palette cycling ("rainbow")

pub mod plasma;
pub mod sine;
pub mod solid;

pub use plasma::{Channels, Plasma, PlasmaParams};
pub use sine::{sine, SineTable};
pub use solid::SolidFill;

use crate::config::EffectKind;
use crate::devices::framebuffer::{Color565, Resolution};

pub trait Effect {
    fn name(&self) -> &'static str;

    /// Colour of one pixel for the current phase. Must not depend on any
    /// other pixel or on call order.
    fn pixel(&self, x: u32, y: u32) -> Color565;

    /// Move the animation on by one frame.
    fn advance(&mut self);

    /// Write every visible pixel of `frame` in raster order.
    fn render(&self, frame: &mut [Color565], resolution: Resolution) {
        let width = resolution.width();
        for (y, row) in frame
            .chunks_mut(resolution.stride())
            .take(resolution.height())
            .enumerate()
        {
            for (x, slot) in row.iter_mut().take(width).enumerate() {
                *slot = self.pixel(x as u32, y as u32);
            }
        }
    }
}

/// The effect a build runs, picked from [`EffectKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyEffect {
    Plasma(Plasma),
    Solid(SolidFill),
}

impl AnyEffect {
    pub fn from_kind(kind: EffectKind) -> Self {
        match kind {
            EffectKind::NorthernLights => AnyEffect::Plasma(Plasma::default()),
            EffectKind::Rainbow => AnyEffect::Solid(SolidFill::rainbow()),
        }
    }
}

impl Effect for AnyEffect {
    fn name(&self) -> &'static str {
        match self {
            AnyEffect::Plasma(fx) => fx.name(),
            AnyEffect::Solid(fx) => fx.name(),
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Color565 {
        match self {
            AnyEffect::Plasma(fx) => fx.pixel(x, y),
            AnyEffect::Solid(fx) => fx.pixel(x, y),
        }
    }

    fn advance(&mut self) {
        match self {
            AnyEffect::Plasma(fx) => fx.advance(),
            AnyEffect::Solid(fx) => fx.advance(),
        }
    }

    fn render(&self, frame: &mut [Color565], resolution: Resolution) {
        match self {
            AnyEffect::Plasma(fx) => fx.render(frame, resolution),
            AnyEffect::Solid(fx) => fx.render(frame, resolution),
        }
    }
}
