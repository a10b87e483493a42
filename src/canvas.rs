//! Square transparent drawing surface with anti-aliased primitives.
//!
//! [`Canvas`] wraps a `tiny_skia::Pixmap` and exposes just the primitives the
//! scissors artwork needs: filled circles, circle outlines, and straight
//! strokes. The canvas starts fully transparent and is converted to an
//! `image::RgbaImage` once drawing is finished.

use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::RenderError;
use crate::palette::Rgba8;

/// A square RGBA raster surface, initialized fully transparent.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent `size`x`size` canvas.
    pub fn new(size: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(size, size).ok_or(RenderError::InvalidCanvasSize { size })?;
        Ok(Self { pixmap })
    }

    /// Edge length of the canvas in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Draws a filled circle.
    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba8) {
        // Radii are clamped positive upstream; a degenerate circle is a no-op.
        let Some(path) = PathBuilder::from_circle(center.0, center.1, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Draws a circle outline with the given stroke width.
    pub fn stroke_circle(&mut self, center: (f32, f32), radius: f32, width: f32, color: Rgba8) {
        let Some(path) = PathBuilder::from_circle(center.0, center.1, radius) else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Draws a straight stroke between two points.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba8) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Converts the canvas to an RGBA image with straight (unpremultiplied) alpha.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let mut img = RgbaImage::new(width, self.pixmap.height());

        // tiny_skia stores premultiplied alpha, image expects straight alpha.
        // Index math stays in usize so huge canvases cannot truncate.
        for (i, pixel) in self.pixmap.pixels().iter().enumerate() {
            let c = pixel.demultiply();
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            img.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
        }

        img
    }
}

fn paint(color: Rgba8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn zero_size_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0),
            Err(RenderError::InvalidCanvasSize { size: 0 })
        ));
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8).unwrap();
        let img = canvas.into_image();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn fill_circle_covers_center() {
        let mut canvas = Canvas::new(32).unwrap();
        canvas.fill_circle((16.0, 16.0), 10.0, palette::BASE);
        let img = canvas.into_image();

        let center = img.get_pixel(16, 16);
        assert_eq!(center.0, [0x1e, 0x1e, 0x2e, 255]);
        // Corners stay transparent.
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn into_image_maps_pixels_row_major() {
        let mut canvas = Canvas::new(16).unwrap();
        // One dot away from the diagonal, so a swapped (x, y) would miss it.
        canvas.fill_circle((10.5, 3.5), 1.0, palette::RING);
        let img = canvas.into_image();

        assert!(img.get_pixel(10, 3).0[3] > 0);
        assert_eq!(img.get_pixel(3, 10).0[3], 0);
    }

    #[test]
    fn stroke_line_marks_pixels() {
        let mut canvas = Canvas::new(16).unwrap();
        canvas.stroke_line((2.0, 8.0), (14.0, 8.0), 2.0, palette::ACCENT);
        let img = canvas.into_image();

        // A pixel on the stroke is opaque, one far away is not.
        assert!(img.get_pixel(8, 8).0[3] > 0);
        assert_eq!(img.get_pixel(8, 2).0[3], 0);
    }
}
