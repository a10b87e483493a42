//! Scale-dependent artwork geometry.
//!
//! The artwork is authored at a reference size of 256 pixels; every coordinate
//! and stroke width is expressed as a multiple of `size / 256`. Stroke widths
//! and radii are clamped to small minimums so the shapes stay visible at the
//! smallest sizes.

/// The reference edge length the artwork proportions are authored against.
pub const REFERENCE_SIZE: u32 = 256;

/// Every derived quantity needed to draw the scissors at one pixel size.
///
/// All fields follow directly from the size; two geometries for the same size
/// are always identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtworkGeometry {
    /// The driving pixel size (canvas edge length).
    pub size: u32,

    /// Inset of the background disc from the canvas edge, `max(1, size / 16)`.
    pub pad: u32,

    /// Stroke width of the disc outline, `max(1, size / 24)`.
    pub outline_width: u32,

    /// Linear scale factor, `size / 256`.
    pub scale: f32,

    /// Horizontal center of the canvas.
    pub cx: f32,
    /// Vertical center of the canvas.
    pub cy: f32,

    /// Stroke width of the blade lines, `max(2, trunc(8 * scale))`.
    pub blade_width: u32,

    /// Height of the blade crossing point, `cy - 38 * scale`.
    pub top_y: f32,

    /// Horizontal half-span of the blade tips, `42 * scale`.
    pub spread: f32,

    /// Height of the blade tips, `cy + 5 * scale`.
    pub mid_y: f32,

    /// Radius of the handle rings, `22 * scale`.
    pub ring_radius: f32,

    /// Stroke width of the handle rings, `max(2, trunc(6 * scale))`.
    pub ring_width: u32,

    /// Vertical center of the handle rings, `mid_y + ring_radius + 4 * scale`.
    pub ring_y: f32,

    /// Radius of the pivot dot, `max(2, trunc(6 * scale))`.
    pub pivot_radius: u32,

    /// Vertical center of the pivot dot, `cy - 12 * scale`.
    pub pivot_y: f32,
}

impl ArtworkGeometry {
    /// Computes the geometry for the given pixel size.
    ///
    /// Callers are expected to pass a positive size; the renderer validates
    /// sizes before reaching this point.
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let scale = s / REFERENCE_SIZE as f32;
        let (cx, cy) = (s / 2.0, s / 2.0);
        let mid_y = cy + 5.0 * scale;
        let ring_radius = 22.0 * scale;

        Self {
            size,
            pad: (size / 16).max(1),
            outline_width: (size / 24).max(1),
            scale,
            cx,
            cy,
            blade_width: ((8.0 * scale) as u32).max(2),
            top_y: cy - 38.0 * scale,
            spread: 42.0 * scale,
            mid_y,
            ring_radius,
            ring_width: ((6.0 * scale) as u32).max(2),
            ring_y: mid_y + ring_radius + 4.0 * scale,
            pivot_radius: ((6.0 * scale) as u32).max(2),
            pivot_y: cy - 12.0 * scale,
        }
    }

    /// Center of the background disc.
    pub fn disc_center(&self) -> (f32, f32) {
        (self.cx, self.cy)
    }

    /// Radius of the background disc, inscribed in the canvas inset by `pad`.
    pub fn disc_radius(&self) -> f32 {
        (self.size as f32 - 2.0 * self.pad as f32) / 2.0
    }

    /// Endpoints of the left blade stroke, crossing point first.
    pub fn left_blade(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.cx - 2.0 * self.scale, self.top_y),
            (self.cx - self.spread, self.mid_y),
        )
    }

    /// Endpoints of the right blade stroke, the horizontal mirror of the left.
    pub fn right_blade(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.cx + 2.0 * self.scale, self.top_y),
            (self.cx + self.spread, self.mid_y),
        )
    }

    /// Center of the left handle ring.
    pub fn left_ring_center(&self) -> (f32, f32) {
        (self.cx - self.spread, self.ring_y)
    }

    /// Center of the right handle ring.
    pub fn right_ring_center(&self) -> (f32, f32) {
        (self.cx + self.spread, self.ring_y)
    }

    /// Center of the pivot dot.
    pub fn pivot_center(&self) -> (f32, f32) {
        (self.cx, self.pivot_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SIZES;

    #[test]
    fn reference_size_geometry() {
        let geo = ArtworkGeometry::for_size(256);

        assert_eq!(geo.pad, 16);
        assert_eq!(geo.outline_width, 10);
        assert_eq!(geo.scale, 1.0);
        assert_eq!(geo.blade_width, 8);
        assert_eq!(geo.top_y, 90.0);
        assert_eq!(geo.spread, 42.0);
        assert_eq!(geo.mid_y, 133.0);
        assert_eq!(geo.ring_radius, 22.0);
        assert_eq!(geo.ring_width, 6);
        assert_eq!(geo.ring_y, 159.0);
        assert_eq!(geo.pivot_radius, 6);
        assert_eq!(geo.pivot_y, 116.0);
        assert_eq!(geo.disc_radius(), 112.0);
    }

    #[test]
    fn smallest_size_clamps() {
        let geo = ArtworkGeometry::for_size(16);

        assert_eq!(geo.pad, 1);
        assert_eq!(geo.outline_width, 1);
        assert_eq!(geo.scale, 0.0625);
        assert_eq!(geo.blade_width, 2);
        assert_eq!(geo.ring_radius, 1.375);
        assert_eq!(geo.ring_width, 2);
        assert_eq!(geo.pivot_radius, 2);
    }

    #[test]
    fn clamped_minimums_hold_for_all_default_sizes() {
        for &size in &DEFAULT_SIZES {
            let geo = ArtworkGeometry::for_size(size);
            assert!(geo.pad >= 1, "pad too small at {size}");
            assert!(geo.outline_width >= 1, "outline too thin at {size}");
            assert!(geo.blade_width >= 2, "blades too thin at {size}");
            assert!(geo.ring_width >= 2, "rings too thin at {size}");
            assert!(geo.pivot_radius >= 2, "pivot too small at {size}");
            assert!(geo.ring_radius > 0.0);
            assert!(geo.disc_radius() > 0.0);
        }
    }

    #[test]
    fn blades_and_rings_mirror_about_center() {
        for &size in &DEFAULT_SIZES {
            let geo = ArtworkGeometry::for_size(size);

            let (l_top, l_tip) = geo.left_blade();
            let (r_top, r_tip) = geo.right_blade();
            assert_eq!(geo.cx - l_top.0, r_top.0 - geo.cx);
            assert_eq!(geo.cx - l_tip.0, r_tip.0 - geo.cx);
            assert_eq!(l_top.1, r_top.1);
            assert_eq!(l_tip.1, r_tip.1);

            let l_ring = geo.left_ring_center();
            let r_ring = geo.right_ring_center();
            assert_eq!(geo.cx - l_ring.0, r_ring.0 - geo.cx);
            assert_eq!(l_ring.1, r_ring.1);
        }
    }

    #[test]
    fn geometry_is_deterministic() {
        assert_eq!(
            ArtworkGeometry::for_size(48),
            ArtworkGeometry::for_size(48)
        );
    }
}
