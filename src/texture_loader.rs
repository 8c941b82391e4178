use std::fs;
use std::io::Cursor;
use std::path::Path;
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::debug;

use crate::error::LoadError;

const NO_ROTATION: u16 = 1;

// --- Load Image, Apply EXIF Rotation ---
pub fn load_image_with_exif_rotation(image_path: &Path) -> Result<Image, LoadError> {
    let file_bytes = fs::read(image_path).map_err(|source| LoadError::Read {
        path: image_path.to_path_buf(),
        source,
    })?;
    check_decodable_size(image_path, file_bytes.len())?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        NO_ROTATION
    };

    // raylib picks the decoder from the extension hint
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| LoadError::Decode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flipped orientations are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != NO_ROTATION {
        debug!(path = %image_path.display(), orientation, "applied EXIF orientation");
    }

    Ok(image)
}

// raylib takes the buffer length as an i32
fn check_decodable_size(image_path: &Path, len: usize) -> Result<(), LoadError> {
    if i32::try_from(len).is_err() {
        return Err(LoadError::Decode {
            path: image_path.to_path_buf(),
            reason: format!("{} bytes is too large to decode", len),
        });
    }
    Ok(())
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(NO_ROTATION),
        Err(e) => {
            // Not fatal, the image is shown unrotated
            debug!(path = %image_path.display(), error = %e, "could not read EXIF data");
            NO_ROTATION
        }
    }
}
