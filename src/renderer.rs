//! Icon rendering engine.
//!
//! [`IconRenderer`] runs one synchronous pass: for every configured size it
//! allocates a transparent canvas, draws the scissors artwork scaled to that
//! size, and finally packages every raster into a single ICO container.

use std::path::Path;

use log::{debug, info};

use crate::artwork;
use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::container;
use crate::error::RenderError;
use crate::geometry::ArtworkGeometry;
use crate::icon::{IconImage, IconSet};

/// Renders the scissors artwork at every configured size and writes the
/// multi-resolution ICO container.
///
/// # Example
///
/// ```no_run
/// use snip_icon::{IconRenderer, RenderConfig};
///
/// // Default sizes (16 through 256) and output path.
/// IconRenderer::new().save().unwrap();
///
/// // Custom run.
/// let config = RenderConfig::new()
///     .with_sizes(vec![32, 64])
///     .with_output("preview.ico");
/// IconRenderer::with_config(config).unwrap().save().unwrap();
/// ```
pub struct IconRenderer {
    config: RenderConfig,
}

impl IconRenderer {
    /// Creates a renderer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Creates a renderer with a custom configuration.
    ///
    /// Fails if the configuration is invalid (empty size list or a zero size).
    pub fn with_config(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the artwork at a single size.
    pub fn render_size(&self, size: u32) -> Result<IconImage, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }

        let geometry = ArtworkGeometry::for_size(size);
        let mut canvas = Canvas::new(size)?;
        artwork::draw_scissors(&mut canvas, &geometry);
        debug!("rendered {size}x{size} canvas");

        Ok(IconImage::new(canvas.into_image()))
    }

    /// Renders every configured size, in order.
    pub fn render_all(&self) -> Result<IconSet, RenderError> {
        let mut set = IconSet::new();
        for &size in &self.config.sizes {
            set.add_image(self.render_size(size)?);
        }
        Ok(set)
    }

    /// Renders all sizes and writes the ICO container to the configured path.
    pub fn save(&self) -> Result<(), RenderError> {
        self.save_to(&self.config.output)
    }

    /// Renders all sizes and writes the ICO container to `path`, overwriting
    /// any existing file.
    pub fn save_to(&self, path: &Path) -> Result<(), RenderError> {
        let set = self.render_all()?;
        container::save_ico(&set, path)?;
        info!("icon saved: {}", path.display());
        Ok(())
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}
