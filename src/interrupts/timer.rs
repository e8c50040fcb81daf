//! PIT channel 0 as the frame pacing clock.
use core::sync::atomic::{AtomicU64, Ordering};

use northern_lights::render::{FramePeriod, Pause};
use x86_64::instructions::port::Port;

/// Base oscillator of the 8253/8254 PIT.
const PIT_BASE_HZ: u32 = 1_193_182;

pub static TIMER_TICKS: AtomicU64 = AtomicU64::new(0);

/// Program channel 0 as a rate generator firing `hz` times a second.
pub fn init_pit(hz: u32) {
    let divisor = (PIT_BASE_HZ / hz).clamp(1, u16::MAX as u32) as u16;
    unsafe {
        let mut command = Port::<u8>::new(0x43);
        let mut channel0 = Port::<u8>::new(0x40);
        // channel 0, lobyte/hibyte, mode 3
        command.write(0x36);
        channel0.write((divisor & 0xFF) as u8);
        channel0.write((divisor >> 8) as u8);
    }
}

pub fn ticks() -> u64 {
    TIMER_TICKS.load(Ordering::Relaxed)
}

/// Waits out a frame period by halting until enough timer ticks arrive.
pub struct TickDelay {
    hz: u32,
}

impl TickDelay {
    pub const fn new(hz: u32) -> Self {
        Self { hz }
    }
}

impl Pause for TickDelay {
    fn pause(&mut self, period: FramePeriod) {
        let target = ticks().saturating_add(period.ticks_at(self.hz));
        while ticks() < target {
            x86_64::instructions::hlt();
        }
    }
}
