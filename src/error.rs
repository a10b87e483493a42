//! Error types for icon rendering and container encoding.

use thiserror::Error;

/// Errors that can occur while rendering the icon or writing the container.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot allocate a {size}x{size} canvas")]
    InvalidCanvasSize { size: u32 },

    #[error("icon sizes must be positive, got {0}")]
    InvalidSize(u32),

    #[error("the size list is empty")]
    EmptySizeList,
}
