//! Frame acquisition and hand-off to the display
use core::ops::{Deref, DerefMut};

use super::{Color565, Resolution};
use crate::error::FxError;

/// Hands out writable frames and takes them back for display.
///
/// `submit` consumes the frame, so nothing can touch the pixels once they
/// belong to the display controller.
pub trait FrameSource {
    type Frame: DerefMut<Target = [Color565]>;

    fn resolution(&self) -> Resolution;

    /// `None` when no buffer is available.
    fn acquire(&mut self) -> Option<Self::Frame>;

    fn submit(&mut self, frame: Self::Frame);
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    type Frame = S::Frame;

    fn resolution(&self) -> Resolution {
        (**self).resolution()
    }

    fn acquire(&mut self) -> Option<S::Frame> {
        (**self).acquire()
    }

    fn submit(&mut self, frame: S::Frame) {
        (**self).submit(frame)
    }
}

/// The display controller side of a frame transfer.
pub trait Panel {
    fn present(&mut self, pixels: &[Color565], resolution: Resolution);
}

impl<P: Panel + ?Sized> Panel for &mut P {
    fn present(&mut self, pixels: &[Color565], resolution: Resolution) {
        (**self).present(pixels, resolution)
    }
}

/// A frame on loan from a [`BackBuffer`].
pub struct Frame<'a> {
    pixels: &'a mut [Color565],
}

impl Deref for Frame<'_> {
    type Target = [Color565];

    fn deref(&self) -> &[Color565] {
        self.pixels
    }
}

impl DerefMut for Frame<'_> {
    fn deref_mut(&mut self) -> &mut [Color565] {
        self.pixels
    }
}

/// Single-buffered frame source over caller-provided storage.
///
/// Only one frame can be outstanding; a second `acquire` before `submit`
/// returns `None`.
pub struct BackBuffer<'a, P> {
    slot: Option<&'a mut [Color565]>,
    resolution: Resolution,
    panel: P,
}

impl<'a, P: Panel> BackBuffer<'a, P> {
    pub fn new(storage: &'a mut [Color565], resolution: Resolution, panel: P) -> Result<Self, FxError> {
        let needed = resolution.len();
        if storage.len() < needed {
            return Err(FxError::BufferTooSmall {
                needed,
                got: storage.len(),
            });
        }
        let (frame, _) = storage.split_at_mut(needed);
        Ok(Self {
            slot: Some(frame),
            resolution,
            panel,
        })
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn is_available(&self) -> bool {
        self.slot.is_some()
    }
}

impl<'a, P: Panel> FrameSource for BackBuffer<'a, P> {
    type Frame = Frame<'a>;

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn acquire(&mut self) -> Option<Frame<'a>> {
        self.slot.take().map(|pixels| Frame { pixels })
    }

    fn submit(&mut self, frame: Frame<'a>) {
        self.panel.present(frame.pixels, self.resolution);
        self.slot = Some(frame.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<Color565>>,
    }

    impl Panel for Recorder {
        fn present(&mut self, pixels: &[Color565], _resolution: Resolution) {
            self.frames.push(pixels.to_vec());
        }
    }

    #[test]
    fn second_acquire_fails_until_submit() {
        let res = Resolution::new(2, 2).unwrap();
        let mut storage = [Color565::BLACK; 4];
        let mut source = BackBuffer::new(&mut storage, res, Recorder::default()).unwrap();

        let mut frame = source.acquire().unwrap();
        assert!(source.acquire().is_none());
        frame[0] = Color565::RED;
        source.submit(frame);

        assert!(source.is_available());
        assert_eq!(source.panel().frames.len(), 1);
        assert_eq!(source.panel().frames[0][0], Color565::RED);
    }

    #[test]
    fn frame_covers_exactly_the_padded_area() {
        let res = Resolution::with_stride(3, 2, 4).unwrap();
        let mut storage = vec![Color565::BLACK; 64];
        let mut source = BackBuffer::new(&mut storage, res, Recorder::default()).unwrap();
        let frame = source.acquire().unwrap();
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn rejects_short_storage() {
        let res = Resolution::with_stride(20, 14, 32).unwrap();
        let mut storage = [Color565::BLACK; 100];
        let err = BackBuffer::new(&mut storage, res, Recorder::default()).err();
        assert_eq!(err, Some(FxError::BufferTooSmall { needed: 448, got: 100 }));
    }
}
