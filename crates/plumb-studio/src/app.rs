use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use plumb_geom::{CoordinateSpace, PixelGrid, RectSnap, ScaleProvider, Size};
use plumb_platform::scale::{MonitorScale, WindowScale};

use crate::layout::Layout;

/// Window and snapping configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub space: CoordinateSpace,
    pub rect_policy: RectSnap,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "plumb studio".to_string(),
            initial_size: LogicalSize::new(801.0, 603.0),
            space: CoordinateSpace::YDown,
            rect_policy: RectSnap::Extend,
        }
    }
}

/// Entry point: runs the event loop until the window closes.
pub fn run(config: StudioConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut state = StudioState::new(config);

    event_loop
        .run_app(&mut state)
        .context("winit event loop terminated with error")?;

    Ok(())
}

struct StudioState {
    config: StudioConfig,
    window: Option<Window>,
    last: Option<Layout>,
}

impl StudioState {
    fn new(config: StudioConfig) -> Self {
        Self { config, window: None, last: None }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let primary = MonitorScale::primary(event_loop);
        match primary.scale() {
            Some(s) => log::info!("primary monitor scale: {s}"),
            None => log::info!("no primary monitor scale; snapping may truncate"),
        }

        log::debug!("window monitor scale: {:?}", MonitorScale::current(&window).scale());

        self.window = Some(window);
        Ok(())
    }

    /// Rebuilds and snaps the layout against the window's current scale.
    fn relayout(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let scale = window.scale_factor();
        let logical: LogicalSize<f64> = window.inner_size().to_logical(scale);
        let viewport = Size::new(logical.width as f32, logical.height as f32);

        let layout = Layout::build(viewport, self.config.space);
        let grid = PixelGrid::from_provider(&WindowScale(window), self.config.space);
        let snapped = layout.snapped(grid, self.config.rect_policy);

        if self.last == Some(snapped) {
            return;
        }

        log::info!(
            "layout for {}x{} @ {:?} ({:?})",
            viewport.width,
            viewport.height,
            grid.scale(),
            self.config.rect_policy,
        );
        for ((name, before), (_, after)) in layout.named().into_iter().zip(snapped.named()) {
            log::info!("  {name:<6} {before:?} -> {after:?}");
        }

        self.last = Some(snapped);
    }
}

impl ApplicationHandler for StudioState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);
        self.relayout();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                event_loop.exit();
            }

            // A scale change can leave the logical size untouched.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.relayout();
            }

            _ => {}
        }
    }
}
