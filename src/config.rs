//! Render configuration: target sizes and output path.
//!
//! The artwork itself is fixed; the configurable parts of a run are the list
//! of pixel sizes to render and the path of the ICO file to write. Both have
//! defaults matching the shipped icon.
//!
//! # Example
//!
//! ```
//! use snip_icon::RenderConfig;
//!
//! let config = RenderConfig::new()
//!     .with_sizes(vec![32, 64])
//!     .with_output("preview.ico");
//! assert!(config.validate().is_ok());
//!
//! // Configs serialize to camelCase JSON.
//! let json = config.to_json().unwrap();
//! let restored = RenderConfig::from_json(&json).unwrap();
//! assert_eq!(config, restored);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// The sizes embedded in the container by default, smallest first.
pub const DEFAULT_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "snip_tool.ico";

/// Configuration for one rendering run.
///
/// # JSON Format
///
/// ```json
/// {
///   "sizes": [16, 24, 32, 48, 64, 128, 256],
///   "output": "snip_tool.ico"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Pixel sizes to render, in container order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// Path of the ICO file to write.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            output: default_output(),
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with the default sizes and output path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sizes to render.
    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Checks that the configuration can be rendered.
    ///
    /// The size list must be non-empty and every size strictly positive.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.sizes.is_empty() {
            return Err(RenderError::EmptySizeList);
        }
        if let Some(&bad) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(RenderError::InvalidSize(bad));
        }
        Ok(())
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
