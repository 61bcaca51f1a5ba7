use thiserror::Error;

/// Errors produced by the overlay geometry core.
///
/// Every condition here is local and recoverable: skip the affected image
/// or rectangle rather than aborting the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OverlayError {
    #[error("invalid image dimensions {width}x{height} for max width {max_width}")]
    InvalidDimensions {
        width: f64,
        height: f64,
        max_width: f64,
    },

    #[error("invalid display size {width}x{height}")]
    InvalidDisplaySize { width: f64, height: f64 },

    #[error("malformed bounding box ({left}, {top}, {right}, {bottom})")]
    MalformedBoundingBox {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
}
