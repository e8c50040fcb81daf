//! # Interrupt Handling Module
//!
//! - **GDT**: Global Descriptor Table with TSS for the double-fault stack
//! - **IDT**: exception handlers plus the timer interrupt
//! - **PIC**: 8259 remapping, everything masked except IRQ0
//! - **Timer**: PIT programming, tick counter and `TickDelay`
//!
//! ## Usage
//!
//! ```ignore
//! interrupts::init(PIT_HZ); // GDT, IDT, PIC, PIT
//! x86_64::instructions::interrupts::enable();
//! ```

use crate::interrupts::{interrupts::init_idt, pic::PICS};

pub mod gdt;
#[allow(clippy::module_inception)]
pub mod interrupts;
pub mod pic;
pub mod timer;

pub fn init(timer_hz: u32) {
    gdt::init();
    init_idt();
    unsafe { PICS.lock().initialize() };
    pic::unmask_timer_only();
    timer::init_pit(timer_hz);
}
