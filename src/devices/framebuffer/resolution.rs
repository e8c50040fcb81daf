use crate::error::FxError;

/// Visible display size plus the row stride of the backing buffer.
///
/// The stride may be wider than the visible width when the display
/// controller wants padded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: usize,
    height: usize,
    stride: usize,
}

impl Resolution {
    /// Unpadded resolution (`stride == width`).
    pub const fn new(width: usize, height: usize) -> Result<Self, FxError> {
        Self::with_stride(width, height, width)
    }

    pub const fn with_stride(width: usize, height: usize, stride: usize) -> Result<Self, FxError> {
        if width == 0 || height == 0 || stride < width {
            return Err(FxError::InvalidResolution {
                width,
                height,
                stride,
            });
        }
        Ok(Self {
            width,
            height,
            stride,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of pixel slots a frame buffer needs, padding included.
    pub const fn len(&self) -> usize {
        self.stride * self.height
    }

    pub const fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.stride
    }
}
