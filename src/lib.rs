//! Northern Lights: a tiny framebuffer effects core for badge-sized displays.
//!
//! The library computes whole frames of RGB565 pixels and drives them through
//! a frame source at a fixed cadence. Everything here is `no_std` and free of
//! global state; the bootable kernel in `main.rs` supplies the hardware side
//! (framebuffer, timer, serial console).
//!
//! ## Modules
//!
//! - `devices::framebuffer`: pixel format, resolution, frame source and panel
//! - `fx`: the sine table and the effect generators
//! - `render`: the frame loop state machine and frame pacing
//! - `config`: compile-time display and effect constants

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod devices;
pub mod error;
pub mod fx;
pub mod render;

pub use devices::framebuffer::{BackBuffer, Color565, Frame, FrameSource, LinearFramebuffer, Panel, Resolution};
pub use error::FxError;
pub use fx::{AnyEffect, Effect, Plasma, PlasmaParams, SolidFill};
pub use render::{FrameLoop, FramePeriod, LoopState, Pause, SpinDelay};
