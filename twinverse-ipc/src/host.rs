use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A window as enumerated by the host, of any class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: u32,
    pub resource_class: String,
    /// Name of the output the window currently sits on, if the host knows it.
    #[serde(default)]
    pub output: Option<String>,
}

/// One physical output. Position in the host's list is its ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorInfo {
    pub name: String,
    pub geometry: Rect,
}

/// Message from the host bridge to the daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// Full resync of everything the daemon mirrors
    Snapshot {
        windows: Vec<WindowInfo>,
        monitors: Vec<MonitorInfo>,
        #[serde(default)]
        active_window: Option<u32>,
    },
    WindowAdded {
        window: WindowInfo,
    },
    WindowRemoved {
        id: u32,
    },
    WindowActivated {
        #[serde(default)]
        id: Option<u32>,
    },
    MonitorsChanged {
        monitors: Vec<MonitorInfo>,
    },
}

/// Mutation the daemon asks the host bridge to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostRequest {
    SetBorderless { id: u32, value: bool },
    SetFrameGeometry { id: u32, frame: Rect },
    SetKeepAbove { id: u32, value: bool },
}

impl HostRequest {
    pub fn window_id(&self) -> u32 {
        match self {
            HostRequest::SetBorderless { id, .. }
            | HostRequest::SetFrameGeometry { id, .. }
            | HostRequest::SetKeepAbove { id, .. } => *id,
        }
    }
}
