use thiserror::Error;

use crate::core::WindowId;

/// Failure of a whole layout pass. The pass is abandoned and the next host
/// event retries it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no monitors available for grouped layout")]
    NoMonitors,
}

/// Failure of one call into the host. Only the affected window is skipped.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("window {0} no longer exists")]
    WindowGone(WindowId),

    #[error("failed to encode host request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write host request: {0}")]
    Io(#[from] std::io::Error),
}
