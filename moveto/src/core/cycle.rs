use super::layout::Target;
use crate::error::Error;
use moveto_types::{Direction, Placement};

/// Monitor change required before placing the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorStep {
    Stay,
    Previous,
    Next,
}

/// Order in which position and size are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOrder {
    /// Move into the target first, then resize.
    MoveFirst,
    /// Grow first, then move into position.
    ResizeFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: Target,
    pub step: MonitorStep,
    pub order: CommandOrder,
}

/// Next placement for a window in `state` pushed towards `direction`.
///
/// Pushing left walks right half -> maximized -> left half -> right half of
/// the previous monitor; pushing right walks the same ring backwards.
pub fn transition(state: Placement, direction: Direction) -> Transition {
    let (target, step, order) = match (direction, state) {
        (Direction::Left, Placement::Left) => {
            (Target::RightHalf, MonitorStep::Previous, CommandOrder::MoveFirst)
        }
        (Direction::Left, Placement::Maximized) => {
            (Target::LeftHalf, MonitorStep::Stay, CommandOrder::MoveFirst)
        }
        (Direction::Left, Placement::Right) => {
            (Target::Maximized, MonitorStep::Stay, CommandOrder::ResizeFirst)
        }
        (Direction::Left, Placement::None) => {
            (Target::LeftHalf, MonitorStep::Stay, CommandOrder::MoveFirst)
        }
        (Direction::Right, Placement::Left) => {
            (Target::Maximized, MonitorStep::Stay, CommandOrder::MoveFirst)
        }
        (Direction::Right, Placement::Maximized) => {
            (Target::RightHalf, MonitorStep::Stay, CommandOrder::ResizeFirst)
        }
        (Direction::Right, Placement::Right) => {
            (Target::LeftHalf, MonitorStep::Next, CommandOrder::MoveFirst)
        }
        (Direction::Right, Placement::None) => {
            (Target::RightHalf, MonitorStep::Stay, CommandOrder::MoveFirst)
        }
    };

    Transition {
        target,
        step,
        order,
    }
}

/// Resolved cycle step: where the window goes and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub monitor: usize,
    pub target: Target,
    pub order: CommandOrder,
}

/// Apply [`transition`] to a window on monitor `current` of `monitor_count`.
pub fn plan(
    state: Placement,
    direction: Direction,
    current: usize,
    monitor_count: usize,
) -> Result<Plan, Error> {
    if monitor_count == 0 {
        return Err(Error::NoMonitors);
    }
    let current = current.min(monitor_count - 1);

    let t = transition(state, direction);
    let monitor = match t.step {
        MonitorStep::Stay => current,
        MonitorStep::Previous => current.checked_sub(1).ok_or(Error::BoundaryReached)?,
        MonitorStep::Next => Some(current + 1)
            .filter(|&index| index < monitor_count)
            .ok_or(Error::BoundaryReached)?,
    };

    tracing::debug!(
        "direction={} state={} -> target={:?} step={:?} order={:?} monitor={}",
        direction,
        state,
        t.target,
        t.step,
        t.order,
        monitor
    );

    Ok(Plan {
        monitor,
        target: t.target,
        order: t.order,
    })
}
