use std::cell::RefCell;
use std::io::Write;

use twinverse_ipc::{HostMessage, HostRequest, MonitorInfo, Rect, WindowInfo};

use crate::core::{ManagedWindow, Monitor, WindowId};
use crate::error::HostError;
use crate::event::HostEvent;

/// Trait for querying windows and monitors from the host.
/// This abstraction allows mocking in tests.
pub trait WindowSystem {
    /// Every window the host knows about, of any class, in host order.
    fn list_windows(&self) -> Vec<ManagedWindow>;
    /// Monitors in host order. The order is stable within one call.
    fn list_monitors(&self) -> Vec<Monitor>;
    fn active_window(&self) -> Option<ManagedWindow>;
}

/// Trait for mutating host windows (side effects).
/// This abstraction allows mocking in tests.
pub trait WindowManipulator {
    fn set_borderless(&self, window_id: WindowId, borderless: bool) -> Result<(), HostError>;
    fn set_frame_geometry(&self, window_id: WindowId, frame: Rect) -> Result<(), HostError>;
    fn set_keep_above(&self, window_id: WindowId, keep_above: bool) -> Result<(), HostError>;
}

/// What folding one [`HostMessage`] into the mirror amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorChange {
    /// A window lifecycle event to dispatch to bound handlers
    Event(HostEvent),
    /// Host state was replaced wholesale; a full layout pass is due
    Resync,
}

/// Host reached through a line-based bridge: host state arrives as
/// [`HostMessage`]s and mutations leave as [`HostRequest`]s, one JSON object
/// per line.
pub struct BridgeHost<W: Write> {
    windows: Vec<WindowInfo>,
    monitors: Vec<MonitorInfo>,
    active_window: Option<WindowId>,
    out: RefCell<W>,
}

impl<W: Write> BridgeHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            windows: Vec::new(),
            monitors: Vec::new(),
            active_window: None,
            out: RefCell::new(out),
        }
    }

    pub fn apply_message(&mut self, msg: HostMessage) -> MirrorChange {
        match msg {
            HostMessage::Snapshot {
                windows,
                monitors,
                active_window,
            } => {
                tracing::info!(
                    "Host snapshot: {} windows, {} monitors",
                    windows.len(),
                    monitors.len()
                );
                self.windows = windows;
                self.monitors = monitors;
                self.active_window = active_window;
                MirrorChange::Resync
            }
            HostMessage::WindowAdded { window } => {
                let id = window.id;
                match self.windows.iter_mut().find(|w| w.id == id) {
                    Some(existing) => *existing = window,
                    None => self.windows.push(window),
                }
                MirrorChange::Event(HostEvent::WindowAdded(id))
            }
            HostMessage::WindowRemoved { id } => {
                self.windows.retain(|w| w.id != id);
                if self.active_window == Some(id) {
                    self.active_window = None;
                }
                MirrorChange::Event(HostEvent::WindowRemoved(id))
            }
            HostMessage::WindowActivated { id } => {
                self.active_window = id;
                MirrorChange::Event(HostEvent::WindowActivated(id))
            }
            HostMessage::MonitorsChanged { monitors } => {
                tracing::info!("Monitors changed: {} monitors", monitors.len());
                self.monitors = monitors;
                MirrorChange::Resync
            }
        }
    }

    /// Drain what has been written so far, keeping the mirror.
    #[cfg(test)]
    pub fn take_output(&mut self) -> W
    where
        W: Default,
    {
        std::mem::take(self.out.get_mut())
    }

    fn send(&self, request: HostRequest) -> Result<(), HostError> {
        let id = request.window_id();
        if !self.windows.iter().any(|w| w.id == id) {
            return Err(HostError::WindowGone(id));
        }

        let mut out = self.out.borrow_mut();
        serde_json::to_writer(&mut *out, &request)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> WindowSystem for BridgeHost<W> {
    fn list_windows(&self) -> Vec<ManagedWindow> {
        self.windows
            .iter()
            .map(ManagedWindow::from_window_info)
            .collect()
    }

    fn list_monitors(&self) -> Vec<Monitor> {
        self.monitors
            .iter()
            .enumerate()
            .map(|(index, info)| Monitor::from_monitor_info(index, info))
            .collect()
    }

    fn active_window(&self) -> Option<ManagedWindow> {
        let id = self.active_window?;
        self.windows
            .iter()
            .find(|w| w.id == id)
            .map(ManagedWindow::from_window_info)
    }
}

impl<W: Write> WindowManipulator for BridgeHost<W> {
    fn set_borderless(&self, window_id: WindowId, borderless: bool) -> Result<(), HostError> {
        self.send(HostRequest::SetBorderless {
            id: window_id,
            value: borderless,
        })
    }

    fn set_frame_geometry(&self, window_id: WindowId, frame: Rect) -> Result<(), HostError> {
        self.send(HostRequest::SetFrameGeometry {
            id: window_id,
            frame,
        })
    }

    fn set_keep_above(&self, window_id: WindowId, keep_above: bool) -> Result<(), HostError> {
        self.send(HostRequest::SetKeepAbove {
            id: window_id,
            value: keep_above,
        })
    }
}
