//! # Programmable Interrupt Controller (8259 PIC)
//!
//! Remaps the legacy PIC pair above the CPU exception vectors:
//! - PIC 1: vectors 32-39 (IRQ 0-7)
//! - PIC 2: vectors 40-47 (IRQ 8-15)
//!
//! Only the timer (IRQ0) is unmasked; the effect takes no input.
use pic8259::ChainedPics;
use spin::Mutex;

pub const PIC_1_OFFSET: u8 = 32;
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    Timer = PIC_1_OFFSET, // 32 - IRQ0
}

impl InterruptIndex {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Mask every line except the timer.
pub fn unmask_timer_only() {
    unsafe {
        PICS.lock().write_masks(!0x01, 0xFF);
    }
}
