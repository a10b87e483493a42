//! Icon collection types.
//!
//! A multi-resolution icon is an ordered sequence of square RGBA images.
//! Insertion order is preserved all the way into the output container, and
//! the last (largest) image is the container's primary entry.

use image::RgbaImage;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A single rendered icon image.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    /// Wraps rendered image data.
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Pixel edge length. Rendered icons are always square.
    pub fn size(&self) -> u32 {
        self.data.width()
    }
}

/// An ordered collection of icon images at various sizes.
///
/// Images are kept in insertion order. The renderer appends sizes smallest
/// first, so the last image is the largest and serves as the container's
/// primary entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The individual icon images, in container order.
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Creates an icon set from a vector of images.
    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Appends an image to the icon set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the primary image: the last one appended, which is the largest
    /// when sizes are rendered smallest first.
    pub fn primary(&self) -> Option<&IconImage> {
        self.images.last()
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }

    /// Returns the declared dimensions of every image, in container order.
    pub fn sizes(&self) -> impl Iterator<Item = SizePx> + '_ {
        self.images.iter().map(|img| img.dimensions())
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
