//! The scissors artwork.
//!
//! Five shapes drawn in a fixed z-order: background disc (fill + outline),
//! two blade strokes, two handle ring outlines, and the pivot dot. All
//! coordinates and stroke widths come from [`ArtworkGeometry`], all colors
//! from [`crate::palette`].

use crate::canvas::Canvas;
use crate::geometry::ArtworkGeometry;
use crate::palette;

/// Draws the complete scissors artwork onto `canvas`.
///
/// The canvas is expected to match `geometry.size`; the shapes are positioned
/// in absolute canvas coordinates.
pub fn draw_scissors(canvas: &mut Canvas, geometry: &ArtworkGeometry) {
    // Background disc, filled then outlined.
    canvas.fill_circle(geometry.disc_center(), geometry.disc_radius(), palette::BASE);
    canvas.stroke_circle(
        geometry.disc_center(),
        geometry.disc_radius(),
        geometry.outline_width as f32,
        palette::ACCENT,
    );

    // Blades, crossing near the top and spreading to the tips.
    let (top, tip) = geometry.left_blade();
    canvas.stroke_line(top, tip, geometry.blade_width as f32, palette::ACCENT);
    let (top, tip) = geometry.right_blade();
    canvas.stroke_line(top, tip, geometry.blade_width as f32, palette::ACCENT);

    // Handle rings, outline only.
    canvas.stroke_circle(
        geometry.left_ring_center(),
        geometry.ring_radius,
        geometry.ring_width as f32,
        palette::RING,
    );
    canvas.stroke_circle(
        geometry.right_ring_center(),
        geometry.ring_radius,
        geometry.ring_width as f32,
        palette::RING,
    );

    // Pivot dot on top of everything.
    canvas.fill_circle(
        geometry.pivot_center(),
        geometry.pivot_radius as f32,
        palette::PIVOT,
    );
}
