//! Frame pacing.
//!
//! The loop never measures how long a frame took; it just waits a fixed
//! period after each one. Good enough for a demo, no deadlines.

use core::time::Duration;

/// Time to wait between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FramePeriod(Duration);

impl FramePeriod {
    pub const ZERO: FramePeriod = FramePeriod(Duration::ZERO);

    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Whole milliseconds, saturating at `u64::MAX`.
    pub const fn as_millis(self) -> u64 {
        clamp_u64(self.0.as_millis())
    }

    /// Whole timer ticks covering this period at `hz`, at least one unless
    /// the period is zero. Saturates at `u64::MAX`.
    pub const fn ticks_at(self, hz: u32) -> u64 {
        let micros = self.0.as_micros();
        if micros == 0 {
            return 0;
        }
        let ticks = micros.saturating_mul(hz as u128) / 1_000_000;
        if ticks == 0 {
            1
        } else {
            clamp_u64(ticks)
        }
    }
}

const fn clamp_u64(v: u128) -> u64 {
    if v > u64::MAX as u128 {
        u64::MAX
    } else {
        v as u64
    }
}

impl From<Duration> for FramePeriod {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

/// Something that can hold the CPU for roughly a frame period.
pub trait Pause {
    fn pause(&mut self, period: FramePeriod);
}

impl<P: Pause + ?Sized> Pause for &mut P {
    fn pause(&mut self, period: FramePeriod) {
        (**self).pause(period)
    }
}

/// Calibrated busy wait, for targets without a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinDelay {
    spins_per_ms: u32,
}

impl SpinDelay {
    pub const fn new(spins_per_ms: u32) -> Self {
        Self { spins_per_ms }
    }

    pub const fn spins_for(&self, period: FramePeriod) -> u64 {
        period.as_millis().saturating_mul(self.spins_per_ms as u64)
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        // 100k spins is the badge's frame delay at 10 ms
        Self::new(10_000)
    }
}

impl Pause for SpinDelay {
    fn pause(&mut self, period: FramePeriod) {
        for _ in 0..self.spins_for(period) {
            core::hint::spin_loop();
        }
    }
}

/// Returns immediately. For tests and benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&mut self, _period: FramePeriod) {}
}
