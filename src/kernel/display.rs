//! Boot framebuffer as the badge panel, plus the static back buffer
use bootloader_api::info::PixelFormat;
use bootloader_api::BootInfo;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use northern_lights::config::BADGE_RESOLUTION;
use northern_lights::devices::framebuffer::{FramebufferLayout, PixelOrder};
use northern_lights::{Color565, LinearFramebuffer};
use spin::Mutex;

const BACK_BUFFER_LEN: usize = BADGE_RESOLUTION.len();

static BACK_BUFFER: Mutex<[Color565; BACK_BUFFER_LEN]> = Mutex::new([Color565::BLACK; BACK_BUFFER_LEN]);

pub fn boot_panel(boot_info: &'static mut BootInfo) -> Result<LinearFramebuffer<'static>, &'static str> {
    let fb = boot_info.framebuffer.as_mut().ok_or("bootloader provided no framebuffer")?;
    let info = fb.info();

    let order = match info.pixel_format {
        PixelFormat::Rgb => PixelOrder::Rgb,
        PixelFormat::Bgr => PixelOrder::Bgr,
        _ => return Err("unsupported framebuffer pixel format"),
    };
    if info.bytes_per_pixel < 3 {
        return Err("framebuffer narrower than 24 bits per pixel");
    }

    let layout = FramebufferLayout {
        width: info.width,
        height: info.height,
        stride: info.stride,
        bytes_per_pixel: info.bytes_per_pixel,
        order,
    };
    let mut panel = LinearFramebuffer::new(fb.buffer_mut(), layout);
    panel.clear(Rgb888::BLACK);
    Ok(panel)
}

/// The one frame's worth of badge pixels; `None` if already taken.
pub fn back_buffer() -> Option<&'static mut [Color565]> {
    let guard = BACK_BUFFER.try_lock()?;
    Some(spin::MutexGuard::leak(guard).as_mut_slice())
}
