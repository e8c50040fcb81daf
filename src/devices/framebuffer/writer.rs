//! Linear framebuffer writer using embedded-graphics
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use super::{Color565, Panel, Resolution};

/// Byte order of one pixel in the linear framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOrder {
    Rgb,
    Bgr,
}

/// Geometry of a raw framebuffer, in pixels except `bytes_per_pixel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferLayout {
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub bytes_per_pixel: usize,
    pub order: PixelOrder,
}

/// Scales badge frames onto a 24/32-bit linear framebuffer.
pub struct LinearFramebuffer<'a> {
    framebuffer: &'a mut [u8],
    layout: FramebufferLayout,
}

impl<'a> LinearFramebuffer<'a> {
    pub fn new(framebuffer: &'a mut [u8], layout: FramebufferLayout) -> Self {
        Self { framebuffer, layout }
    }

    pub fn layout(&self) -> FramebufferLayout {
        self.layout
    }

    /// Fill entire screen with a color
    pub fn clear(&mut self, color: Rgb888) {
        self.fill_rect(0, 0, self.layout.width as u32, self.layout.height as u32, color);
    }

    /// Fill a rectangular region
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb888) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(width, height));
        rect.into_styled(PrimitiveStyle::with_fill(color)).draw(self).ok();
    }

    /// Largest integer upscale of `resolution` that fits the screen, and the
    /// top-left corner that centres it.
    pub fn placement(&self, resolution: Resolution) -> (u32, Point) {
        let sx = self.layout.width / resolution.width();
        let sy = self.layout.height / resolution.height();
        let scale = sx.min(sy).max(1);
        let used_w = resolution.width() * scale;
        let used_h = resolution.height() * scale;
        let origin = Point::new(
            (self.layout.width.saturating_sub(used_w) / 2) as i32,
            (self.layout.height.saturating_sub(used_h) / 2) as i32,
        );
        (scale as u32, origin)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb888> {
        if x >= self.layout.width || y >= self.layout.height {
            return None;
        }
        let bpp = self.layout.bytes_per_pixel;
        let offset = (y * self.layout.stride + x) * bpp;
        let bytes = self.framebuffer.get(offset..offset + 3)?;
        Some(match self.layout.order {
            PixelOrder::Rgb => Rgb888::new(bytes[0], bytes[1], bytes[2]),
            PixelOrder::Bgr => Rgb888::new(bytes[2], bytes[1], bytes[0]),
        })
    }
}

impl Panel for LinearFramebuffer<'_> {
    fn present(&mut self, pixels: &[Color565], resolution: Resolution) {
        let (scale, origin) = self.placement(resolution);
        for (y, row) in pixels
            .chunks(resolution.stride())
            .take(resolution.height())
            .enumerate()
        {
            for (x, color) in row.iter().take(resolution.width()).enumerate() {
                self.fill_rect(
                    origin.x + (x as u32 * scale) as i32,
                    origin.y + (y as u32 * scale) as i32,
                    scale,
                    scale,
                    color.to_rgb888(),
                );
            }
        }
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for LinearFramebuffer<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let FramebufferLayout {
            width,
            height,
            stride,
            bytes_per_pixel,
            order,
        } = self.layout;

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                continue;
            }

            let offset = (y as usize * stride + x as usize) * bytes_per_pixel;
            // three colour bytes go out whatever the layout claims
            if offset + bytes_per_pixel.max(3) <= self.framebuffer.len() {
                let (first, last) = match order {
                    PixelOrder::Rgb => (color.r(), color.b()),
                    PixelOrder::Bgr => (color.b(), color.r()),
                };
                self.framebuffer[offset] = first;
                self.framebuffer[offset + 1] = color.g();
                self.framebuffer[offset + 2] = last;
                if bytes_per_pixel == 4 {
                    self.framebuffer[offset + 3] = 255;
                }
            }
        }
        Ok(())
    }
}

impl OriginDimensions for LinearFramebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.layout.width as u32, self.layout.height as u32)
    }
}
