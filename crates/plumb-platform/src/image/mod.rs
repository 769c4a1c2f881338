//! Bitmap equality by encoded bytes.
//!
//! Two images are equal when the codec produces identical PNG streams for
//! them. No pixel comparison happens here; the codec owns the encoding.

mod eq;

pub use eq::{encode_png, images_equal};
