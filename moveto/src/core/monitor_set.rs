use super::dock::locate_dock;
use super::layout::{Layout, Reservations};
use moveto_types::{MonitorInfo, Rect};

/// How the monitor hosting the dock is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainMonitor {
    /// Monitor with this output name.
    Named(String),
    Leftmost,
    Rightmost,
    /// Guess from the position of the dock tiles.
    Detect,
}

/// Monitors of a single horizontal row, ordered left to right.
#[derive(Debug, Clone, Default)]
pub struct MonitorSet {
    layouts: Vec<Layout>,
}

impl MonitorSet {
    /// Build the placement grid of every monitor.
    ///
    /// `dock_windows` is only called when there is more than one monitor and
    /// the main one has to be detected.
    pub fn build<F>(
        monitors: &[MonitorInfo],
        main: &MainMonitor,
        reserve: &Reservations,
        dock_windows: F,
    ) -> Self
    where
        F: FnOnce() -> Vec<Rect>,
    {
        let mut monitors: Vec<&MonitorInfo> = monitors.iter().collect();
        monitors.sort_by_key(|m| m.frame.x);
        monitors.dedup_by_key(|m| m.frame.x);

        let main_index = match (monitors.len(), main) {
            (0, _) => None,
            (1, _) => Some(0),
            (_, MainMonitor::Named(name)) => {
                let index = monitors.iter().position(|m| &m.name == name);
                if index.is_none() {
                    tracing::warn!("Main monitor {} not found, no dock space reserved", name);
                }
                index
            }
            (_, MainMonitor::Leftmost) => Some(0),
            (n, MainMonitor::Rightmost) => Some(n - 1),
            (_, MainMonitor::Detect) => locate_dock(&dock_windows()).and_then(|x| {
                monitors
                    .iter()
                    .position(|m| x >= m.frame.x && x <= m.frame.x + m.frame.width)
            }),
        };

        let layouts = monitors
            .iter()
            .enumerate()
            .map(|(index, monitor)| Layout::new(monitor, Some(index) == main_index, reserve))
            .collect();

        Self { layouts }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layout> {
        self.layouts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.iter()
    }

    pub fn main(&self) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.is_main)
    }

    /// Index of the first monitor whose usable span contains `x`.
    pub fn index_at(&self, x: i32) -> Option<usize> {
        self.layouts.iter().position(|l| l.contains_x(x))
    }
}
