//! Wire protocol between a compositor-side host bridge and the twinverse daemon.
//!
//! Both directions are newline-delimited JSON. The host bridge writes
//! [`HostMessage`]s to the daemon's stdin and reads [`HostRequest`]s from its
//! stdout.

pub mod geometry;
pub mod host;
pub mod mode;

pub use geometry::Rect;
pub use host::{HostMessage, HostRequest, MonitorInfo, WindowInfo};
pub use mode::{LayoutMode, ParseLayoutModeError};
