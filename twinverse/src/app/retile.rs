use twinverse_ipc::LayoutMode;

use crate::core::{
    assign_fullscreen, assign_groups, geometry, stacking, Config, ManagedWindow, Monitor,
    SplitOrientation, TileLayoutTable, TileRect, WindowClassifier,
};
use crate::error::LayoutError;
use crate::platform::{WindowManipulator, WindowSystem};

/// Outcome of one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub placed: usize,
    pub skipped: usize,
    /// Keep-above flag applied to the managed set, for modes that manage stacking
    pub keep_above: Option<bool>,
}

/// The active layout mode together with the predicate picking managed windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub mode: LayoutMode,
    pub classifier: WindowClassifier,
}

impl LayoutPolicy {
    pub fn new(mode: LayoutMode, classifier: WindowClassifier) -> Self {
        Self { mode, classifier }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mode, WindowClassifier::new(config.managed_class.clone()))
    }

    /// Tile table for splitscreen modes; fullscreen has none.
    pub fn tile_table(&self) -> Option<TileLayoutTable> {
        match self.mode {
            LayoutMode::Fullscreen => None,
            LayoutMode::Horizontal => Some(TileLayoutTable::new(SplitOrientation::Horizontal)),
            LayoutMode::Vertical => Some(TileLayoutTable::new(SplitOrientation::Vertical)),
        }
    }
}

/// Full layout pass: classify, assign, look up tiles, apply, then refresh
/// stacking in splitscreen modes. Everything is read fresh from the host.
pub fn do_recompute<H: WindowSystem + WindowManipulator>(
    host: &H,
    policy: &LayoutPolicy,
) -> Result<PassSummary, LayoutError> {
    let managed = policy.classifier.classify(host.list_windows());
    let monitors = host.list_monitors();

    log_occupancy(policy, &managed, &monitors);

    let mut summary = PassSummary::default();
    match policy.tile_table() {
        None => {
            for p in assign_fullscreen(&managed, &monitors) {
                place(host, p.window, p.monitor, &TileRect::FULL, &mut summary);
            }
            let unassigned = managed.len().saturating_sub(monitors.len());
            if unassigned > 0 {
                tracing::debug!("{} windows left without a monitor", unassigned);
            }
        }
        Some(table) => {
            let placements = assign_groups(&managed, &monitors)?;
            tracing::trace!(
                "Tiling {} windows with {:?} splits",
                placements.len(),
                table.orientation()
            );
            for p in &placements {
                if p.slot == 0 && p.group_index >= monitors.len() {
                    tracing::debug!(
                        "Group {} wraps onto monitor {} ({})",
                        p.group_index,
                        p.monitor.index,
                        p.monitor.name
                    );
                }
                let tile = table.rect(p.group_size, p.slot);
                place(host, p.window, p.monitor, &tile, &mut summary);
            }
            let active = host.active_window();
            summary.keep_above = Some(stacking::refresh(
                host,
                &policy.classifier,
                &managed,
                active.as_ref(),
            ));
        }
    }

    tracing::debug!(
        "Layout pass ({}): {} placed, {} skipped, keep-above {:?}",
        policy.mode,
        summary.placed,
        summary.skipped,
        summary.keep_above
    );
    Ok(summary)
}

/// Stacking-only pass for focus changes in splitscreen modes.
pub fn do_refresh_stacking<H: WindowSystem + WindowManipulator>(
    host: &H,
    policy: &LayoutPolicy,
) -> bool {
    let managed = policy.classifier.classify(host.list_windows());
    let active = host.active_window();
    stacking::refresh(host, &policy.classifier, &managed, active.as_ref())
}

fn place<M: WindowManipulator>(
    manipulator: &M,
    window: &ManagedWindow,
    monitor: &Monitor,
    tile: &TileRect,
    summary: &mut PassSummary,
) {
    match geometry::apply(manipulator, window.id, &monitor.geometry, tile, true) {
        Ok(_) => summary.placed += 1,
        Err(e) => {
            tracing::warn!("Skipping window {} this pass: {}", window.id, e);
            summary.skipped += 1;
        }
    }
}

fn log_occupancy(policy: &LayoutPolicy, managed: &[ManagedWindow], monitors: &[Monitor]) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for monitor in monitors {
        tracing::debug!(
            "Monitor {} ({}) currently holds {} managed windows",
            monitor.index,
            monitor.name,
            policy.classifier.count_on_output(managed, &monitor.name)
        );
    }
}
