use twinverse_ipc::{MonitorInfo, Rect, WindowInfo};

pub type WindowId = u32;

/// Handle to a host window. Holds only what the layout pass reads; the host
/// owns the window itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedWindow {
    pub id: WindowId,
    pub resource_class: String,
    pub output: Option<String>,
}

impl ManagedWindow {
    pub fn from_window_info(info: &WindowInfo) -> Self {
        Self {
            id: info.id,
            resource_class: info.resource_class.clone(),
            output: info.output.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Position in the host's screen list
    pub index: usize,
    pub name: String,
    pub geometry: Rect,
}

impl Monitor {
    pub fn from_monitor_info(index: usize, info: &MonitorInfo) -> Self {
        Self {
            index,
            name: info.name.clone(),
            geometry: info.geometry,
        }
    }
}

/// A rectangle in fractions of a monitor's extent, each field in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TileRect {
    pub const FULL: TileRect = TileRect::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn overlaps(&self, other: &TileRect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    pub fn is_within_unit_square(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.x + self.width <= 1.0
            && self.y + self.height <= 1.0
    }
}
