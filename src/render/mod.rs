//! # Render Loop
//!
//! - `frame_loop`: `FrameLoop`, the Rendering/Waiting state machine, with
//!   pluggable stop conditions
//! - `timing`: `FramePeriod` and the `Pause` primitives that wait it out

pub mod frame_loop;
pub mod timing;

pub use frame_loop::{AfterFrames, FrameLoop, LoopState, Never, StopCondition};
pub use timing::{FramePeriod, NoPause, Pause, SpinDelay};
