use moveto_types::{MonitorInfo, Rect};

/// Edge of a dock tile or mini-window icon.
pub const ICON_SIZE: i32 = 64;
/// Border kept free next to the dock, the icons and between columns.
pub const BORDER: i32 = 2;

/// Screen space withheld from placements on every monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservations {
    /// Windows may overlap the dock, so the main monitor keeps its full width.
    pub cover_dock: bool,
    /// Windows may overlap mini-windows, so the bottom icon row is not reserved.
    pub cover_miniwindows: bool,
    /// Height of the title bar drawn by the window manager.
    pub decoration_height: i32,
}

/// One of the three rectangles a monitor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    LeftHalf,
    RightHalf,
    Maximized,
}

/// Placement grid of a single monitor.
///
/// The rectangles are computed once in [`Layout::new`]; the only later change
/// is the vertical shift for windows that misreport their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: String,
    pub frame: Rect,
    pub is_main: bool,
    pub usable_width: i32,
    pub usable_height: i32,
    left_half: Rect,
    right_half: Rect,
    maximized: Rect,
}

impl Layout {
    pub fn new(monitor: &MonitorInfo, is_main: bool, reserve: &Reservations) -> Self {
        let frame = monitor.frame;

        let mut usable_width = frame.width;
        if usable_width % 2 != 0 {
            usable_width -= 1;
        }
        if is_main && !reserve.cover_dock {
            usable_width -= ICON_SIZE + BORDER;
        } else {
            usable_width -= BORDER;
        }

        let mut usable_height = frame.height;
        if !reserve.cover_miniwindows {
            usable_height -= ICON_SIZE + BORDER;
        }

        let half = usable_width / 2;
        let height = usable_height - reserve.decoration_height;

        let layout = Self {
            name: monitor.name.clone(),
            frame,
            is_main,
            usable_width,
            usable_height,
            left_half: Rect::new(frame.x, 0, half - 1, height),
            right_half: Rect::new(frame.x + half, 0, half, height),
            maximized: Rect::new(frame.x, 0, usable_width, height),
        };

        tracing::debug!(
            "Layout {}: main={} usable={}x{} left={} right={} maximized={}",
            layout.name,
            layout.is_main,
            layout.usable_width,
            layout.usable_height,
            layout.left_half,
            layout.right_half,
            layout.maximized
        );

        layout
    }

    pub fn left_half(&self) -> Rect {
        self.left_half
    }

    pub fn right_half(&self) -> Rect {
        self.right_half
    }

    pub fn rect(&self, target: Target) -> Rect {
        match target {
            Target::LeftHalf => self.left_half,
            Target::RightHalf => self.right_half,
            Target::Maximized => self.maximized,
        }
    }

    /// Whether `x` lies within the usable horizontal span of this monitor.
    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.frame.x && x < self.frame.x + self.usable_width
    }

    /// Copy of this layout with every rectangle starting at `y`.
    pub fn with_top(&self, y: i32) -> Self {
        let mut layout = self.clone();
        layout.left_half.y = y;
        layout.right_half.y = y;
        layout.maximized.y = y;
        layout
    }
}
