//! Platform adapters for plumb.
//!
//! Everything that touches the outside world lives here so `plumb-geom`
//! stays a pure value library: logger setup, winit-backed device scale
//! lookup, and image comparison through an image codec.

pub mod image;
pub mod logging;
pub mod scale;
