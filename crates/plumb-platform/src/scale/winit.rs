use plumb_geom::ScaleProvider;
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::Window;

/// Converts a winit scale factor; non-finite or non-positive factors are
/// reported as absent.
pub fn scale_from_factor(factor: f64) -> Option<f32> {
    if factor.is_finite() && factor > 0.0 {
        Some(factor as f32)
    } else {
        None
    }
}

/// Scale of the monitor a window currently sits on.
///
/// Queried on every call, so a window dragged to another display picks up
/// the new ratio on the next snap.
#[derive(Debug, Clone, Copy)]
pub struct WindowScale<'a>(pub &'a Window);

impl ScaleProvider for WindowScale<'_> {
    fn scale(&self) -> Option<f32> {
        scale_from_factor(self.0.scale_factor())
    }
}

/// Scale of a specific monitor, or none when there is no monitor.
#[derive(Debug, Clone)]
pub struct MonitorScale(pub Option<MonitorHandle>);

impl MonitorScale {
    /// The platform's primary ("main") screen. Some platforms (Wayland)
    /// have no notion of one and report none.
    pub fn primary(event_loop: &ActiveEventLoop) -> Self {
        Self(event_loop.primary_monitor())
    }

    /// The monitor `window` is on, if the platform can tell.
    pub fn current(window: &Window) -> Self {
        Self(window.current_monitor())
    }
}

impl ScaleProvider for MonitorScale {
    fn scale(&self) -> Option<f32> {
        let monitor = self.0.as_ref()?;
        scale_from_factor(monitor.scale_factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_factors_pass_through() {
        assert_eq!(scale_from_factor(1.0), Some(1.0));
        assert_eq!(scale_from_factor(2.0), Some(2.0));
        assert_eq!(scale_from_factor(1.25), Some(1.25));
    }

    #[test]
    fn unusable_factors_are_absent() {
        assert_eq!(scale_from_factor(0.0), None);
        assert_eq!(scale_from_factor(-2.0), None);
        assert_eq!(scale_from_factor(f64::NAN), None);
        assert_eq!(scale_from_factor(f64::INFINITY), None);
    }

    #[test]
    fn missing_monitor_has_no_scale() {
        assert_eq!(MonitorScale(None).scale(), None);
    }
}
