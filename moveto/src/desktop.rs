use anyhow::Result;
use moveto_types::{MonitorInfo, Rect};

use crate::core::{ActiveWindow, Decorations};
use crate::effect::Effect;

/// Read side of the display server.
pub trait Desktop {
    /// Every active monitor, in no particular order.
    fn monitors(&self) -> Result<Vec<MonitorInfo>>;

    /// Title and reported geometry of the focused window.
    fn active_window(&self) -> Result<ActiveWindow>;

    /// Geometry of every top-level window, used to find the dock.
    fn window_geometries(&self) -> Result<Vec<Rect>>;

    /// Measure window manager decorations.
    fn decorations(&self) -> Result<Decorations>;
}

/// Write side of the display server.
pub trait CommandSink {
    /// Apply `effects` in order.
    fn apply(&mut self, effects: &[Effect]) -> Result<()>;
}
