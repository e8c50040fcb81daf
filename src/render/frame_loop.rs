//! The render/wait state machine.
//!
//! ```text
//!        ┌────────────┐  frame submitted   ┌───────────┐
//!   ───▶ │ Rendering  │ ─────────────────▶ │  Waiting  │
//!        └────────────┘ ◀───────────────── └───────────┘
//!              │          phase advanced,
//!              │          period elapsed
//!              ▼
//!      AllocationFailed (loop halts)
//! ```

use super::timing::{FramePeriod, Pause};
use crate::devices::framebuffer::FrameSource;
use crate::error::FxError;
use crate::fx::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Rendering,
    Waiting,
}

/// Decides, before each frame, whether the loop should stop.
pub trait StopCondition {
    /// `frames` is the number of frames completed so far.
    fn should_stop(&mut self, frames: u64) -> bool;
}

impl<F: FnMut(u64) -> bool> StopCondition for F {
    fn should_stop(&mut self, frames: u64) -> bool {
        self(frames)
    }
}

/// Stop once this many frames have been rendered and waited out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfterFrames(pub u64);

impl StopCondition for AfterFrames {
    fn should_stop(&mut self, frames: u64) -> bool {
        frames >= self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl StopCondition for Never {
    fn should_stop(&mut self, _frames: u64) -> bool {
        false
    }
}

/// Owns the effect state and drives it through a frame source.
pub struct FrameLoop<S, E, P> {
    source: S,
    effect: E,
    pause: P,
    period: FramePeriod,
    state: LoopState,
    frames: u64,
}

impl<S, E, P> FrameLoop<S, E, P>
where
    S: FrameSource,
    E: Effect,
    P: Pause,
{
    pub fn new(source: S, effect: E, pause: P, period: FramePeriod) -> Self {
        Self {
            source,
            effect,
            pause,
            period,
            state: LoopState::Rendering,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames fully completed (rendered and waited out).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn period(&self) -> FramePeriod {
        self.period
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the current state once and move to the next.
    pub fn step(&mut self) -> Result<LoopState, FxError> {
        self.state = match self.state {
            LoopState::Rendering => {
                self.render_frame()?;
                LoopState::Waiting
            }
            LoopState::Waiting => {
                self.effect.advance();
                self.pause.pause(self.period);
                self.frames = self.frames.wrapping_add(1);
                LoopState::Rendering
            }
        };
        Ok(self.state)
    }

    /// Run whole frames until `stop` says so. Returns the frame count.
    pub fn run_until<C: StopCondition>(&mut self, mut stop: C) -> Result<u64, FxError> {
        loop {
            if self.state == LoopState::Rendering && stop.should_stop(self.frames) {
                return Ok(self.frames);
            }
            self.step()?;
        }
    }

    /// Loop forever. Only comes back with the error that stopped it.
    pub fn run(mut self) -> FxError {
        loop {
            if let Err(err) = self.step() {
                return err;
            }
        }
    }

    fn render_frame(&mut self) -> Result<(), FxError> {
        let resolution = self.source.resolution();
        let mut frame = self
            .source
            .acquire()
            .ok_or(FxError::AllocationFailed { frame: self.frames })?;
        self.effect.render(&mut frame, resolution);
        self.source.submit(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::{Color565, Resolution};
    use crate::fx::SolidFill;
    use crate::render::timing::NoPause;
    use std::vec;
    use std::vec::Vec;

    /// Vec-backed source that runs dry after `budget` frames.
    struct Budgeted {
        resolution: Resolution,
        budget: usize,
        shown: Vec<Vec<Color565>>,
    }

    impl FrameSource for Budgeted {
        type Frame = Vec<Color565>;

        fn resolution(&self) -> Resolution {
            self.resolution
        }

        fn acquire(&mut self) -> Option<Vec<Color565>> {
            if self.budget == 0 {
                return None;
            }
            self.budget -= 1;
            Some(vec![Color565::BLACK; self.resolution.len()])
        }

        fn submit(&mut self, frame: Vec<Color565>) {
            self.shown.push(frame);
        }
    }

    fn budgeted(budget: usize) -> Budgeted {
        Budgeted {
            resolution: Resolution::new(2, 2).unwrap(),
            budget,
            shown: Vec::new(),
        }
    }

    #[test]
    fn states_alternate() {
        let mut fl = FrameLoop::new(budgeted(4), SolidFill::rainbow(), NoPause, FramePeriod::ZERO);
        assert_eq!(fl.state(), LoopState::Rendering);
        assert_eq!(fl.step(), Ok(LoopState::Waiting));
        assert_eq!(fl.frames(), 0);
        assert_eq!(fl.source().shown.len(), 1);
        assert_eq!(fl.step(), Ok(LoopState::Rendering));
        assert_eq!(fl.frames(), 1);
        assert_eq!(fl.effect().counter(), 1);
    }

    #[test]
    fn run_until_stops_on_frame_boundary() {
        let mut fl = FrameLoop::new(budgeted(10), SolidFill::rainbow(), NoPause, FramePeriod::ZERO);
        assert_eq!(fl.run_until(AfterFrames(3)), Ok(3));
        assert_eq!(fl.state(), LoopState::Rendering);
        assert_eq!(fl.source().shown.len(), 3);
    }

    #[test]
    fn closures_work_as_stop_conditions() {
        let mut fl = FrameLoop::new(budgeted(10), SolidFill::rainbow(), NoPause, FramePeriod::ZERO);
        assert_eq!(fl.run_until(|frames: u64| frames == 2), Ok(2));
    }

    #[test]
    fn exhausted_source_is_fatal() {
        let mut fl = FrameLoop::new(budgeted(2), SolidFill::rainbow(), NoPause, FramePeriod::ZERO);
        assert_eq!(fl.run_until(Never), Err(FxError::AllocationFailed { frame: 2 }));
        assert_eq!(fl.state(), LoopState::Rendering);
        // no phase advance for the frame that never rendered
        assert_eq!(fl.effect().counter(), 2);
    }

    #[test]
    fn run_returns_the_fatal_error() {
        let fl = FrameLoop::new(budgeted(5), SolidFill::rainbow(), NoPause, FramePeriod::ZERO);
        assert_eq!(fl.run(), FxError::AllocationFailed { frame: 5 });
    }
}
