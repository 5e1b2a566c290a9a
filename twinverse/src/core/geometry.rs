use twinverse_ipc::Rect;

use super::{TileRect, WindowId};
use crate::error::HostError;
use crate::platform::WindowManipulator;

/// Resolve a tile against a monitor's absolute geometry.
///
/// Edges are rounded rather than sizes, so neighbouring tiles share an edge
/// exactly even when a monitor dimension is odd. Always derived from the
/// monitor, never from a window's previous frame.
pub fn target_frame(monitor: &Rect, tile: &TileRect) -> Rect {
    let left = edge(monitor.x, monitor.width, tile.x);
    let right = edge(monitor.x, monitor.width, tile.x + tile.width);
    let top = edge(monitor.y, monitor.height, tile.y);
    let bottom = edge(monitor.y, monitor.height, tile.y + tile.height);

    let frame = Rect {
        x: left as i32,
        y: top as i32,
        width: (right - left).max(0) as u32,
        height: (bottom - top).max(0) as u32,
    };
    debug_assert!(frame.right() <= monitor.right() && frame.bottom() <= monitor.bottom());
    frame
}

fn edge(origin: i32, extent: u32, fraction: f64) -> i64 {
    origin as i64 + (fraction * extent as f64).round() as i64
}

/// Push a resolved tile and the border flag to one window.
pub fn apply<M: WindowManipulator>(
    manipulator: &M,
    window_id: WindowId,
    monitor: &Rect,
    tile: &TileRect,
    borderless: bool,
) -> Result<Rect, HostError> {
    let frame = target_frame(monitor, tile);
    manipulator.set_borderless(window_id, borderless)?;
    manipulator.set_frame_geometry(window_id, frame)?;
    tracing::debug!(
        "Placed window {} at ({}, {}) {}x{}",
        window_id,
        frame.x,
        frame.y,
        frame.width,
        frame.height
    );
    Ok(frame)
}
