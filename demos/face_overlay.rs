use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, Rgba, RgbaImage};
use rs_face_overlay::face_overlay::detector::{Face, FaceDetector, FaceDetectorOptions};
use rs_face_overlay::face_overlay::overlay::compute_overlay_frame;
use rs_face_overlay::face_overlay::render::{render_overlay, Colors};
use rs_face_overlay::face_overlay::types::{BBox, ImageDimensions};

/// Stands in for an on-device detector: reports two faces in a 1280x960
/// photo.
struct CannedDetector;

impl FaceDetector for CannedDetector {
    fn process_image(
        &self,
        _image: &Path,
        _options: &FaceDetectorOptions,
    ) -> Result<Vec<Face>> {
        Ok(vec![
            Face::new(BBox::new(280.0, 180.0, 560.0, 520.0)),
            Face::new(BBox::new(700.0, 240.0, 940.0, 540.0)),
        ])
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let detector = CannedDetector;
    let faces = detector.process_image(Path::new("demo.jpg"), &FaceDetectorOptions::default())?;

    let dimensions = ImageDimensions::new(1280.0, 960.0);
    let frame = compute_overlay_frame(&dimensions, &faces, 400.0)?;

    println!(
        "display size: {}x{}",
        frame.display_size.width, frame.display_size.height
    );
    for rect in &frame.face_rects {
        println!(
            "face rect: ({}, {}) {}x{}",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    let photo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        1280,
        960,
        Rgba([96, 112, 128, 255]),
    ));
    let rendered = render_overlay(&photo, &frame, Colors::GREEN, 2)?;
    rendered.save("./face_overlay_demo.png")?;

    Ok(())
}
