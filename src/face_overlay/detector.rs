use std::path::Path;

use anyhow::Error;

use crate::face_overlay::types::{BBox, Landmark};

/// Landmark detail level requested from the detector. Opaque to the
/// geometry core; detectors map it onto their own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkMode {
    None = 0,
    All = 1,
}

impl From<i32> for LandmarkMode {
    fn from(value: i32) -> Self {
        match value {
            1 => LandmarkMode::All,
            _ => LandmarkMode::None,
        }
    }
}

impl LandmarkMode {
    pub fn to_int(self) -> i32 {
        self as i32
    }
}

impl Default for LandmarkMode {
    fn default() -> Self {
        LandmarkMode::All
    }
}

/// Contour detail level requested from the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourMode {
    None = 0,
    All = 1,
}

impl From<i32> for ContourMode {
    fn from(value: i32) -> Self {
        match value {
            1 => ContourMode::All,
            _ => ContourMode::None,
        }
    }
}

impl ContourMode {
    pub fn to_int(self) -> i32 {
        self as i32
    }
}

impl Default for ContourMode {
    fn default() -> Self {
        ContourMode::All
    }
}

/// Detection-mode configuration handed to the detector with each image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceDetectorOptions {
    pub landmark_mode: LandmarkMode,
    pub contour_mode: ContourMode,
}

impl FaceDetectorOptions {
    pub fn new(landmark_mode: LandmarkMode, contour_mode: ContourMode) -> Self {
        Self {
            landmark_mode,
            contour_mode,
        }
    }
}

/// One detection result from the external detector.
///
/// The geometry core consumes only `bounding_box`; landmark and contour
/// points ride along untouched for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub bounding_box: BBox,
    pub landmarks: Vec<Landmark>,
    pub contours: Vec<Landmark>,
}

impl Face {
    /// Create a detection result with no landmark or contour payload.
    pub fn new(bounding_box: BBox) -> Self {
        Self {
            bounding_box,
            landmarks: Vec::new(),
            contours: Vec::new(),
        }
    }
}

/// Pluggable on-device face detection backend.
///
/// Implement this to wire in a real detector (an ML Kit bridge, ONNX,
/// dlib) and hand its results to the overlay pipeline. Bounding boxes must
/// be reported in native pixel coordinates of the referenced image.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in the image at `image`, returning one [`Face`] per
    /// detection. Failures are detector-defined.
    fn process_image(
        &self,
        image: &Path,
        options: &FaceDetectorOptions,
    ) -> Result<Vec<Face>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_conversions() {
        assert_eq!(LandmarkMode::from(0), LandmarkMode::None);
        assert_eq!(LandmarkMode::from(1), LandmarkMode::All);
        assert_eq!(LandmarkMode::from(7), LandmarkMode::None);
        assert_eq!(LandmarkMode::All.to_int(), 1);

        assert_eq!(ContourMode::from(1), ContourMode::All);
        assert_eq!(ContourMode::None.to_int(), 0);
    }

    #[test]
    fn test_default_options_request_full_detail() {
        let options = FaceDetectorOptions::default();
        assert_eq!(options.landmark_mode, LandmarkMode::All);
        assert_eq!(options.contour_mode, ContourMode::All);
        assert_eq!(
            options,
            FaceDetectorOptions::new(LandmarkMode::All, ContourMode::All)
        );
    }

    #[test]
    fn test_face_carries_detector_payload_untouched() {
        let mut face = Face::new(BBox::new(10.0, 10.0, 50.0, 60.0));
        face.landmarks.push(Landmark::new(22.0, 30.0));
        face.contours.push(Landmark::new(12.5, 14.0));

        assert_eq!(face.landmarks, vec![Landmark::new(22.0, 30.0)]);
        assert_eq!(face.contours, vec![Landmark::new(12.5, 14.0)]);
    }

    #[test]
    fn test_detector_trait_is_object_safe() {
        struct NoFaces;

        impl FaceDetector for NoFaces {
            fn process_image(
                &self,
                _image: &Path,
                _options: &FaceDetectorOptions,
            ) -> Result<Vec<Face>, Error> {
                Ok(Vec::new())
            }
        }

        let detector: Box<dyn FaceDetector> = Box::new(NoFaces);
        let faces = detector
            .process_image(Path::new("missing.jpg"), &FaceDetectorOptions::default())
            .unwrap();
        assert!(faces.is_empty());
    }
}
