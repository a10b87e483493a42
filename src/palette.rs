//! Fixed color palette for the scissors artwork.
//!
//! The artwork uses four colors from the Catppuccin mocha palette. Colors are
//! compile-time constants; the icon is not color-configurable.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Background disc fill (`#1e1e2e`).
pub const BASE: Rgba8 = Rgba8::rgb(0x1e, 0x1e, 0x2e);

/// Disc outline and blade strokes (`#89b4fa`).
pub const ACCENT: Rgba8 = Rgba8::rgb(0x89, 0xb4, 0xfa);

/// Handle ring outlines (`#cba6f7`).
pub const RING: Rgba8 = Rgba8::rgb(0xcb, 0xa6, 0xf7);

/// Pivot dot fill (`#a6e3a1`).
pub const PIVOT: Rgba8 = Rgba8::rgb(0xa6, 0xe3, 0xa1);
