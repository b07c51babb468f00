use crate::core::CommandOrder;
use moveto_types::Rect;

/// Primitive command handed to the display server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move the active window's top-left corner.
    MoveWindow { x: i32, y: i32 },
    ResizeWindow { width: i32, height: i32 },
    /// Warp the mouse pointer.
    WarpPointer { x: i32, y: i32 },
}

impl Effect {
    pub fn targets_window(&self) -> bool {
        matches!(self, Effect::MoveWindow { .. } | Effect::ResizeWindow { .. })
    }
}

/// Commands placing the active window at `rect`, followed by a pointer warp to
/// its center so that child dialogs open on the same monitor.
pub fn place_window(rect: Rect, order: CommandOrder) -> Vec<Effect> {
    let move_window = Effect::MoveWindow {
        x: rect.x,
        y: rect.y,
    };
    let resize_window = Effect::ResizeWindow {
        width: rect.width,
        height: rect.height,
    };
    let (x, y) = rect.center();

    let mut effects = match order {
        CommandOrder::MoveFirst => vec![move_window, resize_window],
        CommandOrder::ResizeFirst => vec![resize_window, move_window],
    };
    effects.push(Effect::WarpPointer { x, y });
    effects
}
