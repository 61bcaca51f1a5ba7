use crate::face_overlay::error::OverlayError;
use crate::face_overlay::types::{BBox, DisplayRect, DisplaySize};

/// Project a face bounding box from native image pixel coordinates into the
/// display space described by `display`.
///
/// Each axis is divided by that same axis's original-to-display scale
/// factor, so rectangles stay aligned on non-square images. Widths and
/// heights are rounded up to avoid a sub-pixel gap visually clipping the
/// face; positions are left unrounded.
///
/// Pure function of its inputs. Detections can be projected in any order,
/// from any number of threads.
pub fn project_face_rect(bbox: &BBox, display: &DisplaySize) -> Result<DisplayRect, OverlayError> {
    if !(display.width.is_finite() && display.width > 0.0)
        || !(display.height.is_finite() && display.height > 0.0)
    {
        return Err(OverlayError::InvalidDisplaySize {
            width: display.width,
            height: display.height,
        });
    }

    if bbox.right < bbox.left || bbox.bottom < bbox.top {
        return Err(OverlayError::MalformedBoundingBox {
            left: bbox.left,
            top: bbox.top,
            right: bbox.right,
            bottom: bbox.bottom,
        });
    }

    let (w_scale, h_scale) = display.scale_factors();

    let x = bbox.left / w_scale;
    let y = bbox.top / h_scale;
    let width = (bbox.right / w_scale - x).ceil();
    let height = (bbox.bottom / h_scale - y).ceil();

    Ok(DisplayRect {
        x,
        y,
        width,
        height,
    })
}
