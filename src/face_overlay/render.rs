use image::imageops::FilterType;
use image::{DynamicImage, Rgba};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::face_overlay::error::OverlayError;
use crate::face_overlay::overlay::OverlayFrame;

/// RGB color with optional alpha, used for overlay strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: Option<u8>) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a.unwrap_or(255)])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: None,
    };
    pub const RED: Color = Color {
        r: 255,
        g: 0,
        b: 0,
        a: None,
    };
    pub const GREEN: Color = Color {
        r: 0,
        g: 255,
        b: 0,
        a: None,
    };
    pub const BLUE: Color = Color {
        r: 0,
        g: 0,
        b: 255,
        a: None,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: None,
    };
}

/// Resize `image` to the frame's display size and draw each face rectangle
/// as a hollow box, `thickness` pixels inward from the rectangle edge.
///
/// Rectangle positions are rounded only here, at raster time. Rectangles
/// reaching past the canvas are clipped by the drawing routine; empty ones
/// are not drawn at all.
pub fn render_overlay(
    image: &DynamicImage,
    frame: &OverlayFrame,
    color: Color,
    thickness: u32,
) -> Result<DynamicImage, OverlayError> {
    let display = &frame.display_size;
    if !(display.width.is_finite() && display.width > 0.0)
        || !(display.height.is_finite() && display.height > 0.0)
    {
        return Err(OverlayError::InvalidDisplaySize {
            width: display.width,
            height: display.height,
        });
    }

    let canvas_width = display.width.round().max(1.0) as u32;
    let canvas_height = display.height.round().max(1.0) as u32;

    let mut canvas = image
        .resize_exact(canvas_width, canvas_height, FilterType::Triangle)
        .to_rgba8();

    let stroke = color.to_rgba();
    for rect in &frame.face_rects {
        if rect.is_empty() {
            continue;
        }

        let left = rect.x.round() as i32;
        let top = rect.y.round() as i32;
        let width = rect.width as u32;
        let height = rect.height as u32;

        for inset in 0..thickness {
            let shrink = inset * 2;
            if width <= shrink || height <= shrink {
                break;
            }
            let outline = Rect::at(left + inset as i32, top + inset as i32)
                .of_size(width - shrink, height - shrink);
            draw_hollow_rect_mut(&mut canvas, outline, stroke);
        }
    }

    Ok(DynamicImage::ImageRgba8(canvas))
}
