use std::path::Path;

use crate::error::ViewError;

/// Decode an image file into tightly packed RGBA8 bytes plus dimensions.
pub fn load_rgba_from_file(path: &Path) -> Result<(Vec<u8>, u32, u32), ViewError> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

/// Built-in two-tone checkerboard so the viewer runs with no assets on
/// disk. `tiles` is the number of squares per edge.
pub fn checkerboard_rgba(size: u32, tiles: u32) -> (Vec<u8>, u32, u32) {
    let tile = (size / tiles).max(1);
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dark = ((x / tile) + (y / tile)) % 2 == 0;
            if dark {
                data.extend_from_slice(&[96, 64, 40, 255]);
            } else {
                data.extend_from_slice(&[210, 180, 140, 255]);
            }
        }
    }
    (data, size, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_has_expected_dimensions() {
        let (data, width, height) = checkerboard_rgba(64, 8);
        assert_eq!(width, 64);
        assert_eq!(height, 64);
        assert_eq!(data.len(), 64 * 64 * 4);
    }

    #[test]
    fn checkerboard_alternates_between_tiles() {
        let (data, width, _) = checkerboard_rgba(64, 8);
        let pixel = |x: u32, y: u32| {
            let i = ((y * width + x) * 4) as usize;
            (data[i], data[i + 1], data[i + 2], data[i + 3])
        };
        // 8-pixel tiles: (0,0) and (8,0) fall in adjacent squares.
        assert_ne!(pixel(0, 0), pixel(8, 0));
        assert_eq!(pixel(0, 0), pixel(8, 8));
    }

    #[test]
    fn checkerboard_is_opaque() {
        let (data, _, _) = checkerboard_rgba(16, 4);
        assert!(data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn missing_file_reports_an_error() {
        let err = load_rgba_from_file(Path::new("/nonexistent/texture.png"))
            .expect_err("opening a missing file should fail");
        assert_eq!(err.key, "image-error");
    }
}
