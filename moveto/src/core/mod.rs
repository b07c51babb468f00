mod classify;
mod cycle;
mod dock;
mod layout;
mod monitor_set;
mod window;

pub use classify::*;
pub use cycle::*;
pub use layout::*;
pub use monitor_set::*;
pub use window::*;
