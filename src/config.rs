//! Compile-time display and effect settings.

use crate::devices::framebuffer::Resolution;
use crate::render::FramePeriod;

/// The badge panel: 20x14 visible pixels in rows padded to 32.
pub const BADGE_RESOLUTION: Resolution = match Resolution::with_stride(20, 14, 32) {
    Ok(res) => res,
    Err(_) => panic!("badge resolution"),
};

pub const PLASMA_FRAME_PERIOD: FramePeriod = FramePeriod::from_millis(10);
pub const SOLID_FRAME_PERIOD: FramePeriod = FramePeriod::from_millis(1000);

/// Timer interrupt rate the kernel programs into the PIT.
pub const PIT_HZ: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    NorthernLights,
    Rainbow,
}

impl EffectKind {
    pub const fn frame_period(self) -> FramePeriod {
        match self {
            EffectKind::NorthernLights => PLASMA_FRAME_PERIOD,
            EffectKind::Rainbow => SOLID_FRAME_PERIOD,
        }
    }
}

#[cfg(not(feature = "rainbow"))]
pub const EFFECT: EffectKind = EffectKind::NorthernLights;
#[cfg(feature = "rainbow")]
pub const EFFECT: EffectKind = EffectKind::Rainbow;
