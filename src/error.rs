use core::fmt;

/// Failures the effect core can report.
///
/// Only [`FxError::AllocationFailed`] can happen once the frame loop is
/// running; the other variants are construction-time checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxError {
    /// The frame source had no buffer to hand out. Fatal for the loop.
    AllocationFailed { frame: u64 },
    /// A zero dimension, or a stride narrower than the visible width.
    InvalidResolution {
        width: usize,
        height: usize,
        stride: usize,
    },
    /// Backing storage shorter than `stride * height` pixels.
    BufferTooSmall { needed: usize, got: usize },
    EmptyPalette,
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FxError::AllocationFailed { frame } => {
                write!(f, "frame buffer unavailable at frame {}", frame)
            }
            FxError::InvalidResolution {
                width,
                height,
                stride,
            } => write!(
                f,
                "invalid resolution {}x{} (stride {})",
                width, height, stride
            ),
            FxError::BufferTooSmall { needed, got } => {
                write!(f, "frame storage too small: need {} pixels, got {}", needed, got)
            }
            FxError::EmptyPalette => write!(f, "palette has no colors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names_the_failing_frame() {
        let err = FxError::AllocationFailed { frame: 42 };
        assert_eq!(err.to_string(), "frame buffer unavailable at frame 42");
    }

    #[test]
    fn display_reports_resolution_fields() {
        let err = FxError::InvalidResolution {
            width: 20,
            height: 14,
            stride: 16,
        };
        assert_eq!(err.to_string(), "invalid resolution 20x14 (stride 16)");
    }
}
