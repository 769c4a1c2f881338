//! Plumb studio: opens a window and logs how a small layout aligns and
//! snaps against the live device scale. Move the window between monitors
//! to watch the snapped values change.

mod app;
mod layout;

use anyhow::Result;
use plumb_platform::logging::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    app::run(app::StudioConfig::default())
}
