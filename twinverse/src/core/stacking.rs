use super::{ManagedWindow, WindowClassifier};
use crate::platform::WindowManipulator;

/// Keep every managed window above other windows exactly while one of them
/// is the active window. The flag is the same for the whole managed set.
///
/// Returns the flag that was applied.
pub fn refresh<M: WindowManipulator>(
    manipulator: &M,
    classifier: &WindowClassifier,
    managed: &[ManagedWindow],
    active: Option<&ManagedWindow>,
) -> bool {
    let keep_above = active.is_some_and(|w| classifier.is_managed(w));

    for window in managed {
        if let Err(e) = manipulator.set_keep_above(window.id, keep_above) {
            tracing::warn!(
                "Skipping keep-above for window {}: {}",
                window.id,
                e
            );
        }
    }

    tracing::debug!(
        "Keep-above {} for {} managed windows",
        keep_above,
        managed.len()
    );
    keep_above
}
