//! Device scale providers backed by winit.
//!
//! winit reports scale factors as `f64` physical pixels per logical pixel;
//! these adapters narrow them to the `f32` the geometry crate works in and
//! report unusable values as absent.

mod winit;

pub use self::winit::{scale_from_factor, MonitorScale, WindowScale};
