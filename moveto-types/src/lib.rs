pub mod command;
pub mod geometry;

pub use command::{Direction, ParseDirectionError, Placement};
pub use geometry::{MonitorInfo, Rect};
