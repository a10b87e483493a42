//! snip-icon: procedural multi-resolution scissors icon generator.
//!
//! This crate renders a fixed scissors artwork (background disc, two blade
//! strokes, two handle rings, one pivot dot) at a list of pixel sizes and
//! packages every raster into a single Windows ICO container. The artwork is
//! authored at a 256-pixel reference size and scaled proportionally, with
//! stroke widths clamped so the shapes stay visible at 16 pixels.
//!
//! # Example
//!
//! ```no_run
//! use snip_icon::{IconRenderer, RenderConfig};
//!
//! // Render the default sizes (16..256) to the default output path.
//! IconRenderer::new().save().unwrap();
//!
//! // Or configure sizes and output explicitly.
//! let config = RenderConfig::new()
//!     .with_sizes(vec![32, 64, 128])
//!     .with_output("preview.ico");
//! IconRenderer::with_config(config).unwrap().save().unwrap();
//! ```
//!
//! Output is deterministic: two runs with the same configuration produce
//! byte-identical files.

mod artwork;
mod canvas;
mod config;
mod container;
mod error;
mod geometry;
mod icon;
mod palette;
mod renderer;

pub use artwork::draw_scissors;
pub use canvas::Canvas;
pub use config::{DEFAULT_OUTPUT, DEFAULT_SIZES, RenderConfig};
pub use container::{encode_ico, save_ico};
pub use error::RenderError;
pub use geometry::{ArtworkGeometry, REFERENCE_SIZE};
pub use icon::{IconImage, IconSet, SizePx};
pub use palette::Rgba8;
pub use renderer::IconRenderer;
