use log::{debug, warn};

use crate::face_overlay::detector::Face;
use crate::face_overlay::error::OverlayError;
use crate::face_overlay::fit::fit_dimensions;
use crate::face_overlay::project::project_face_rect;
use crate::face_overlay::types::{DisplayRect, DisplaySize, ImageDimensions};

/// Everything the presentation layer needs to draw one image with its face
/// overlays: the fitted display size and one rectangle per projected face.
///
/// A frame belongs to a single image. When a new image replaces the current
/// one, the old frame is discarded wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub display_size: DisplaySize,
    pub face_rects: Vec<DisplayRect>,
}

/// Compute the display size once and project every detected face into it.
///
/// A face whose bounding box is malformed is logged and skipped; the rest
/// of the frame still renders. Invalid image dimensions abort the whole
/// frame since nothing can be displayed without a valid fit.
pub fn compute_overlay_frame(
    dimensions: &ImageDimensions,
    faces: &[Face],
    max_width: f64,
) -> Result<OverlayFrame, OverlayError> {
    let display_size = fit_dimensions(dimensions, max_width)?;

    let mut face_rects = Vec::with_capacity(faces.len());
    for face in faces {
        match project_face_rect(&face.bounding_box, &display_size) {
            Ok(rect) => face_rects.push(rect),
            Err(err) => warn!("face rectangle skipped: {}", err),
        }
    }

    debug!("projected {} of {} face(s)", face_rects.len(), faces.len());

    Ok(OverlayFrame {
        display_size,
        face_rects,
    })
}
