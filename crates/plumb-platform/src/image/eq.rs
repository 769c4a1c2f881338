use std::io::Cursor;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat};

/// Encodes `img` as an in-memory PNG.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .with_context(|| format!("failed to encode {}x{} image as PNG", img.width(), img.height()))?;
    Ok(out.into_inner())
}

/// `true` when both handles are the same image, or encode to identical PNG
/// bytes. An image that fails to encode is never equal to anything else.
pub fn images_equal(lhs: &DynamicImage, rhs: &DynamicImage) -> bool {
    if std::ptr::eq(lhs, rhs) {
        return true;
    }

    match (encode_png(lhs), encode_png(rhs)) {
        (Ok(a), Ok(b)) => a == b,
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("image comparison failed: {e:#}");
            false
        }
    }
}
