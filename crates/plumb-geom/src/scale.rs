//! Device scale capability.
//!
//! The pixel-snap engine never reads global platform state; callers hand it
//! something that can answer "how many physical pixels per point right
//! now?". `None` means no display is attached (or the platform can't tell)
//! and selects the truncating fallback.

/// Source of the current pixels-per-point ratio.
///
/// Implementations must be side-effect free. The answer may change between
/// calls (a window dragged onto another monitor), so the snap engine asks
/// again on every call instead of caching.
pub trait ScaleProvider {
    fn scale(&self) -> Option<f32>;
}

impl ScaleProvider for Option<f32> {
    #[inline]
    fn scale(&self) -> Option<f32> {
        *self
    }
}

impl ScaleProvider for f32 {
    #[inline]
    fn scale(&self) -> Option<f32> {
        Some(*self)
    }
}

impl<T: ScaleProvider + ?Sized> ScaleProvider for &T {
    #[inline]
    fn scale(&self) -> Option<f32> {
        (**self).scale()
    }
}

/// Adapts a closure into a [`ScaleProvider`].
#[derive(Debug, Clone, Copy)]
pub struct ScaleFn<F>(pub F);

impl<F> ScaleProvider for ScaleFn<F>
where
    F: Fn() -> Option<f32>,
{
    #[inline]
    fn scale(&self) -> Option<f32> {
        (self.0)()
    }
}

/// Keeps only scales the grid math can divide by.
pub(crate) fn usable_scale(scale: Option<f32>) -> Option<f32> {
    match scale {
        Some(s) if s.is_finite() && s > 0.0 => Some(s),
        Some(s) => {
            log::warn!("ignoring unusable device scale {s}; snapping falls back to truncation");
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn plain_values_are_providers() {
        assert_eq!(2.0f32.scale(), Some(2.0));
        assert_eq!(None::<f32>.scale(), None);
        assert_eq!((&Some(3.0f32)).scale(), Some(3.0));
    }

    #[test]
    fn closure_is_queried_each_time() {
        let calls = Cell::new(0);
        let provider = ScaleFn(|| {
            calls.set(calls.get() + 1);
            Some(calls.get() as f32)
        });
        assert_eq!(provider.scale(), Some(1.0));
        assert_eq!(provider.scale(), Some(2.0));
    }

    #[test]
    fn unusable_scales_are_dropped() {
        assert_eq!(usable_scale(Some(2.0)), Some(2.0));
        assert_eq!(usable_scale(Some(0.0)), None);
        assert_eq!(usable_scale(Some(-1.0)), None);
        assert_eq!(usable_scale(Some(f32::NAN)), None);
        assert_eq!(usable_scale(Some(f32::INFINITY)), None);
        assert_eq!(usable_scale(None), None);
    }
}
