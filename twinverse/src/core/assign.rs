use super::{ManagedWindow, Monitor, MAX_GROUP_SIZE};
use crate::error::LayoutError;

/// A window paired with the monitor it should cover entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub window: &'a ManagedWindow,
    pub monitor: &'a Monitor,
}

/// A window's place inside a group of up to four windows sharing a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPlacement<'a> {
    pub window: &'a ManagedWindow,
    pub monitor: &'a Monitor,
    pub group_index: usize,
    pub group_size: usize,
    pub slot: usize,
}

/// Pair the i-th window with the i-th monitor. Windows beyond the monitor
/// count get no placement at all.
pub fn assign_fullscreen<'a>(
    windows: &'a [ManagedWindow],
    monitors: &'a [Monitor],
) -> Vec<Placement<'a>> {
    windows
        .iter()
        .zip(monitors)
        .map(|(window, monitor)| Placement { window, monitor })
        .collect()
}

/// Split windows into consecutive runs of four and hand run `g` to monitor
/// `g % monitors.len()`.
///
/// When there are more runs than monitors the runs wrap around, so later runs
/// land on the same monitors as earlier ones and cover them.
pub fn assign_groups<'a>(
    windows: &'a [ManagedWindow],
    monitors: &'a [Monitor],
) -> Result<Vec<GroupPlacement<'a>>, LayoutError> {
    if monitors.is_empty() {
        return Err(LayoutError::NoMonitors);
    }

    let placements = windows
        .iter()
        .enumerate()
        .map(|(i, window)| {
            let group_index = i / MAX_GROUP_SIZE;
            let group_start = group_index * MAX_GROUP_SIZE;
            GroupPlacement {
                window,
                monitor: &monitors[group_index % monitors.len()],
                group_index,
                group_size: (windows.len() - group_start).min(MAX_GROUP_SIZE),
                slot: i % MAX_GROUP_SIZE,
            }
        })
        .collect();

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinverse_ipc::Rect;

    fn windows(n: u32) -> Vec<ManagedWindow> {
        (0..n)
            .map(|id| ManagedWindow {
                id,
                resource_class: "gamescope".to_string(),
                output: None,
            })
            .collect()
    }

    fn monitors(n: usize) -> Vec<Monitor> {
        (0..n)
            .map(|index| Monitor {
                index,
                name: format!("DP-{}", index + 1),
                geometry: Rect::new(index as i32 * 1920, 0, 1920, 1080),
            })
            .collect()
    }

    #[test]
    fn test_fullscreen_pairs_by_index() {
        let ws = windows(2);
        let ms = monitors(3);
        let placements = assign_fullscreen(&ws, &ms);

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].window.id, 0);
        assert_eq!(placements[0].monitor.index, 0);
        assert_eq!(placements[1].window.id, 1);
        assert_eq!(placements[1].monitor.index, 1);
    }

    #[test]
    fn test_fullscreen_leaves_extra_windows_unassigned() {
        let ws = windows(3);
        let ms = monitors(1);
        let placements = assign_fullscreen(&ws, &ms);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].window.id, 0);
    }

    #[test]
    fn test_fullscreen_count_is_min_of_both() {
        for n in 0..6 {
            for m in 0..4 {
                let ws = windows(n);
                let ms = monitors(m);
                assert_eq!(assign_fullscreen(&ws, &ms).len(), (n as usize).min(m));
            }
        }
    }

    #[test]
    fn test_groups_zero_monitors_is_error() {
        let ws = windows(2);
        assert_eq!(assign_groups(&ws, &[]), Err(LayoutError::NoMonitors));
    }

    #[test]
    fn test_groups_no_windows() {
        let ms = monitors(2);
        assert!(assign_groups(&[], &ms).unwrap().is_empty());
    }

    #[test]
    fn test_groups_five_windows_two_monitors() {
        let ws = windows(5);
        let ms = monitors(2);
        let placements = assign_groups(&ws, &ms).unwrap();

        for p in &placements[..4] {
            assert_eq!(p.monitor.index, 0);
            assert_eq!(p.group_size, 4);
            assert_eq!(p.group_index, 0);
        }
        let slots: Vec<_> = placements[..4].iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);

        let last = &placements[4];
        assert_eq!(last.window.id, 4);
        assert_eq!(last.monitor.index, 1);
        assert_eq!(last.group_size, 1);
        assert_eq!(last.slot, 0);
    }

    #[test]
    fn test_groups_wrap_around_monitors() {
        let ws = windows(10);
        let ms = monitors(2);
        let placements = assign_groups(&ws, &ms).unwrap();

        for (i, p) in placements.iter().enumerate() {
            assert_eq!(p.monitor.index, (i / 4) % 2);
        }
        // Third run lands back on the first monitor with two occupants
        assert_eq!(placements[8].monitor.index, 0);
        assert_eq!(placements[8].group_size, 2);
        assert_eq!(placements[9].slot, 1);
    }

    #[test]
    fn test_groups_size_of_partial_run() {
        let ws = windows(7);
        let ms = monitors(3);
        let sizes: Vec<_> = assign_groups(&ws, &ms)
            .unwrap()
            .iter()
            .map(|p| p.group_size)
            .collect();
        assert_eq!(sizes, vec![4, 4, 4, 4, 3, 3, 3]);
    }
}
