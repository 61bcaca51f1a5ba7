/// Native pixel dimensions of a source image, as reported by the image
/// picker or the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDimensions {
    pub width: f64,
    pub height: f64,
}

impl ImageDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return the dimensions with width and height swapped.
    ///
    /// Some camera stacks report portrait captures with landscape
    /// dimensions; callers transpose before fitting.
    pub fn transposed(&self) -> ImageDimensions {
        ImageDimensions {
            width: self.height,
            height: self.width,
        }
    }

    /// Return the dimensions as a tuple (width, height).
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// On-screen size of a fitted image, plus the native size it was derived
/// from. `width` never exceeds the display width it was fitted to, and the
/// aspect ratio of `width` x `height` matches the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
    pub original_width: f64,
    pub original_height: f64,
}

impl DisplaySize {
    /// Per-axis original-to-display scale factors as (width, height).
    pub fn scale_factors(&self) -> (f64, f64) {
        (
            self.original_width / self.width,
            self.original_height / self.height,
        )
    }

    /// Whether the image is shown at its native size.
    pub fn is_unscaled(&self) -> bool {
        self.width == self.original_width && self.height == self.original_height
    }
}

/// Face bounding box in native image pixel coordinates, in the order the
/// detector reports it: left, top, right, bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BBox {
    /// Create a new BBox.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Return the box as a tuple (left, top, right, bottom).
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.left, self.top, self.right, self.bottom)
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the box covers no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// Renderable overlay rectangle in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A single landmark or contour point reported by the detector, carried
/// through to the presentation layer untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
