use image::io::Reader as ImageReader;
use image::ImageFormat;
use std::path::Path;

/// Width and height from a PNG file's header, without decoding pixels.
///
/// Returns `None` (and logs why) when the file cannot be read or does not
/// carry the PNG signature.
pub fn png_dimensions(path: impl AsRef<Path>) -> Option<(u32, u32)> {
    let path = path.as_ref();
    let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => reader,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to open sprite");
            return None;
        }
    };

    if reader.format() != Some(ImageFormat::Png) {
        tracing::warn!(path = %path.display(), "not a PNG file");
        return None;
    }

    match reader.into_dimensions() {
        Ok(dims) => Some(dims),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed PNG header");
            None
        }
    }
}
