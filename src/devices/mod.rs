//! Device Subsystem
//!
//! Display-side abstractions:
//! - `framebuffer`: pixel format, frame sources and linear framebuffer output

pub mod framebuffer;
