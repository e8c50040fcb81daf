#![no_std]
#![no_main]
#![feature(abi_x86_interrupt)]

extern crate rlibc;

use bootloader_api::{entry_point, BootInfo};
use core::panic::PanicInfo;
use spin::Mutex;
use uart_16550::SerialPort;

use northern_lights::config::{BADGE_RESOLUTION, EFFECT, PIT_HZ};
use northern_lights::fx::{AnyEffect, Effect};
use northern_lights::{BackBuffer, FrameLoop};

use crate::{interrupts::timer::TickDelay, kernel::init_kernel};

mod interrupts;
mod kernel;

entry_point!(kernel_main);

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut serial = $crate::SERIAL.lock();
        let _ = writeln!(serial, $($arg)*);
    }};
}

pub fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    let panel = match init_kernel(boot_info) {
        Ok(panel) => panel,
        Err(_) => {
            println!("Kernel initialization failed!");
            halt_forever();
        }
    };

    kernel::selftest::test_all();

    let Some(storage) = kernel::display::back_buffer() else {
        println!("Back buffer already in use");
        halt_forever();
    };
    let source = match BackBuffer::new(storage, BADGE_RESOLUTION, panel) {
        Ok(source) => source,
        Err(e) => {
            println!("Frame source setup failed: {}", e);
            halt_forever();
        }
    };

    let effect = AnyEffect::from_kind(EFFECT);
    println!("Starting {}", effect.name());

    let frame_loop = FrameLoop::new(source, effect, TickDelay::new(PIT_HZ), EFFECT.frame_period());
    let err = frame_loop.run();
    println!("Frame loop stopped: {}", err);
    halt_forever()
}

fn halt_forever() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let msg = info.message();
    let loc = info.location();
    println!("PANIC : {} | {:?}", msg, loc);

    halt_forever()
}
