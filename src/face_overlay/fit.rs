use crate::face_overlay::error::OverlayError;
use crate::face_overlay::types::{DisplaySize, ImageDimensions};

/// Fit an image into the available display width, preserving aspect ratio.
///
/// Images are only ever shrunk: when the image is already narrower than
/// `max_width` it keeps its native size. The returned [`DisplaySize`] echoes
/// the original dimensions so rectangles can later be projected into the
/// fitted space.
///
/// All three inputs must be finite and positive; anything else is rejected
/// with [`OverlayError::InvalidDimensions`] instead of letting NaN or
/// Infinity leak into every downstream projection.
pub fn compute_display_size(
    original_width: f64,
    original_height: f64,
    max_width: f64,
) -> Result<DisplaySize, OverlayError> {
    if !valid_extent(original_width) || !valid_extent(original_height) || !valid_extent(max_width) {
        return Err(OverlayError::InvalidDimensions {
            width: original_width,
            height: original_height,
            max_width,
        });
    }

    let ratio = original_width / original_height;
    let width = original_width.min(max_width);
    let height = width / ratio;

    Ok(DisplaySize {
        width,
        height,
        original_width,
        original_height,
    })
}

/// Convenience wrapper over [`compute_display_size`] for a dimension pair.
pub fn fit_dimensions(
    dimensions: &ImageDimensions,
    max_width: f64,
) -> Result<DisplaySize, OverlayError> {
    compute_display_size(dimensions.width, dimensions.height, max_width)
}

fn valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_is_shrunk_to_max_width() {
        let display = compute_display_size(1000.0, 500.0, 400.0).unwrap();
        assert_eq!(display.width, 400.0);
        assert_eq!(display.height, 200.0);
        assert_eq!(display.original_width, 1000.0);
        assert_eq!(display.original_height, 500.0);
    }

    #[test]
    fn test_narrow_image_keeps_native_size() {
        let display = compute_display_size(300.0, 600.0, 400.0).unwrap();
        assert_eq!(display.width, 300.0);
        assert_eq!(display.height, 600.0);
        assert!(display.is_unscaled());
    }

    #[test]
    fn test_width_bounds_hold() {
        for &(w, h, max) in &[
            (1000.0, 500.0, 400.0),
            (300.0, 600.0, 400.0),
            (1234.0, 771.0, 397.0),
            (50.0, 2000.0, 10.0),
            (4032.0, 3024.0, 393.0),
        ] {
            let display = compute_display_size(w, h, max).unwrap();
            assert!(display.width <= max);
            assert!(display.width <= w);
        }
    }

    #[test]
    fn test_aspect_ratio_is_preserved() {
        for &(w, h, max) in &[
            (1000.0, 500.0, 400.0),
            (1234.0, 771.0, 397.0),
            (50.0, 2000.0, 10.0),
            (4032.0, 3024.0, 393.0),
        ] {
            let display = compute_display_size(w, h, max).unwrap();
            let original_ratio = w / h;
            let display_ratio = display.width / display.height;
            let relative_error = ((display_ratio - original_ratio) / original_ratio).abs();
            assert!(
                relative_error < 1e-9,
                "aspect ratio drifted for {w}x{h} at max {max}: {relative_error}"
            );
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_outputs() {
        let a = compute_display_size(1920.0, 1080.0, 411.0).unwrap();
        let b = compute_display_size(1920.0, 1080.0, 411.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        for &(w, h, max) in &[
            (0.0, 500.0, 400.0),
            (1000.0, 0.0, 400.0),
            (1000.0, 500.0, 0.0),
            (-1000.0, 500.0, 400.0),
            (1000.0, -500.0, 400.0),
            (f64::NAN, 500.0, 400.0),
            (1000.0, f64::INFINITY, 400.0),
        ] {
            let result = compute_display_size(w, h, max);
            assert!(
                matches!(result, Err(OverlayError::InvalidDimensions { .. })),
                "expected rejection for {w}x{h} at max {max}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_fit_dimensions_matches_raw_call() {
        let dims = ImageDimensions::new(1000.0, 500.0);
        assert_eq!(
            fit_dimensions(&dims, 400.0).unwrap(),
            compute_display_size(1000.0, 500.0, 400.0).unwrap()
        );
    }
}
