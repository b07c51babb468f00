use thiserror::Error;

/// Reasons a command ends without touching the window.
#[derive(Error, Debug)]
pub enum Error {
    /// The display server did not report the data a cycle needs.
    #[error("cannot query {0}")]
    Query(String),

    /// A monitor name given by the user does not exist.
    #[error("no such monitor: {0}")]
    NoSuchMonitor(String),

    /// The window is already on the outermost monitor in that direction.
    #[error("no monitor beyond the current one")]
    BoundaryReached,

    #[error("no monitors detected")]
    NoMonitors,
}

impl Error {
    /// Expected steady states that end a command silently.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Error::Query(_) | Error::BoundaryReached | Error::NoMonitors
        )
    }
}
