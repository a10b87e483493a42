//! ICO container encoding.
//!
//! Packages an [`IconSet`] into a single Windows ICO file: one directory
//! entry per image, written in set order. Readers conventionally pick the
//! largest entry as the primary image, which is the set's last (and largest)
//! image here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, ResourceType};
use log::debug;

use crate::error::RenderError;
use crate::icon::IconSet;

/// Encodes the icon set as an ICO container into `writer`.
///
/// Entries carry their exact pixel dimensions and appear in set order.
/// Fails if the set is empty; an ICO file must contain at least one image.
pub fn encode_ico<W: Write>(set: &IconSet, writer: W) -> Result<(), RenderError> {
    if set.is_empty() {
        return Err(RenderError::EmptySizeList);
    }

    let mut dir = IconDir::new(ResourceType::Icon);
    for image in set {
        let dims = image.dimensions();
        let entry =
            ico::IconImage::from_rgba_data(dims.width, dims.height, image.data.as_raw().clone());
        dir.add_entry(IconDirEntry::encode(&entry)?);
    }

    debug!("encoding ICO container with {} entries", set.len());
    dir.write(writer)?;
    Ok(())
}

/// Writes the icon set as an ICO file at `path`, overwriting any existing file.
pub fn save_ico(set: &IconSet, path: &Path) -> Result<(), RenderError> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode_ico(set, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconImage;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn solid_image(size: u32, color: [u8; 4]) -> IconImage {
        let mut img = RgbaImage::new(size, size);
        for pixel in img.pixels_mut() {
            *pixel = Rgba(color);
        }
        IconImage::new(img)
    }

    fn test_set() -> IconSet {
        IconSet::from_images(vec![
            solid_image(4, [255, 0, 0, 255]),
            solid_image(8, [0, 255, 0, 255]),
            solid_image(16, [0, 0, 255, 255]),
        ])
    }

    #[test]
    fn empty_set_is_rejected() {
        let mut buf = Vec::new();
        assert!(matches!(
            encode_ico(&IconSet::new(), &mut buf),
            Err(RenderError::EmptySizeList)
        ));
    }

    #[test]
    fn entries_keep_order_and_dimensions() {
        let mut buf = Vec::new();
        encode_ico(&test_set(), &mut buf).unwrap();

        let dir = IconDir::read(Cursor::new(&buf)).unwrap();
        let dims: Vec<_> = dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(dims, vec![(4, 4), (8, 8), (16, 16)]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let set = test_set();
        let mut first = Vec::new();
        let mut second = Vec::new();
        encode_ico(&set, &mut first).unwrap();
        encode_ico(&set, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn decoded_pixels_survive_the_roundtrip() {
        let mut buf = Vec::new();
        encode_ico(&test_set(), &mut buf).unwrap();

        let dir = IconDir::read(Cursor::new(&buf)).unwrap();
        let decoded = dir.entries()[1].decode().unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(&decoded.rgba_data()[..4], &[0, 255, 0, 255]);
    }
}
