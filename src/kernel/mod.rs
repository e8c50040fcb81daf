//! # Kernel Bring-Up
//!
//! - `init`: ordered boot phases with status output
//! - `status`: component status tracking for the boot log
//! - `display`: boot framebuffer panel and the static back buffer
//! - `selftest`: on-target checks of the effect core

pub mod display;
pub mod init;
pub mod selftest;
pub mod status;

pub use init::init_kernel;
