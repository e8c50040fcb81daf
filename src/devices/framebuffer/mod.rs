//! # Framebuffer Module
//!
//! Pixel format, display geometry and the frame hand-off seam.
//!
//! ## Modules
//!
//! - `color`: `Color565` packed pixel with the rainbow palette constants
//! - `resolution`: visible size plus padded row stride
//! - `source`: `FrameSource` / `Panel` traits and the single `BackBuffer`
//! - `writer`: `LinearFramebuffer`, an embedded-graphics draw target that
//!   upscales badge frames onto a 24/32-bit screen
//!
//! ## Frame Ownership
//!
//! ```text
//!  FrameSource::acquire ──▶ Frame (exclusive, &mut pixels)
//!                              │ effect writes every pixel
//!  FrameSource::submit  ◀──────┘ frame moved, Panel::present copies it out
//! ```

pub mod color;
pub mod resolution;
pub mod source;
pub mod writer;

pub use color::Color565;
pub use resolution::Resolution;
pub use source::{BackBuffer, Frame, FrameSource, Panel};
pub use writer::{FramebufferLayout, LinearFramebuffer, PixelOrder};
