//! Kernel initialization phases
use bootloader_api::BootInfo;
use northern_lights::config::PIT_HZ;
use northern_lights::LinearFramebuffer;

use crate::kernel::display;
use crate::kernel::status::{all_components_ready, register_component, update_component_status, InitStatus};
use crate::println;

const PHASES: [&str; 3] = ["Serial Console", "Interrupt System", "Display System"];

/// Bring the machine up and hand back the screen the effect draws on
pub fn init_kernel(boot_info: &'static mut BootInfo) -> Result<LinearFramebuffer<'static>, &'static str> {
    for name in PHASES {
        register_component(name);
    }

    init_phase(1, "Serial Console", || {
        crate::SERIAL.lock().init();
        Ok(())
    })?;

    println!("╔════════════════════════════════════════╗");
    println!("║        Northern Lights Badge FX        ║");
    println!("╚════════════════════════════════════════╝\n");

    init_phase(2, "Interrupt System", init_interrupts)?;
    let panel = init_phase(3, "Display System", || display::boot_panel(boot_info))?;

    if all_components_ready() {
        println!("✅ Kernel initialization complete!\n");
    }
    Ok(panel)
}

fn init_phase<T>(
    index: usize,
    name: &'static str,
    init_fn: impl FnOnce() -> Result<T, &'static str>,
) -> Result<T, &'static str> {
    update_component_status(name, InitStatus::InProgress);
    println!("[{}/{}] Initializing {}...", index, PHASES.len(), name);

    match init_fn() {
        Ok(value) => {
            update_component_status(name, InitStatus::Completed);
            println!("    ✓ {} initialized successfully\n", name);
            Ok(value)
        }
        Err(e) => {
            update_component_status(name, InitStatus::Failed(e));
            println!("    ✗ {} failed: {}\n", name, e);
            Err(e)
        }
    }
}

fn init_interrupts() -> Result<(), &'static str> {
    crate::interrupts::init(PIT_HZ);
    x86_64::instructions::interrupts::enable();
    Ok(())
}
