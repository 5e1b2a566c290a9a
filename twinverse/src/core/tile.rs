use super::TileRect;

/// Most windows that share one monitor.
pub const MAX_GROUP_SIZE: usize = 4;

const Q_TOP_LEFT: TileRect = TileRect::new(0.0, 0.0, 0.5, 0.5);
const Q_BOTTOM_LEFT: TileRect = TileRect::new(0.0, 0.5, 0.5, 0.5);
const Q_TOP_RIGHT: TileRect = TileRect::new(0.5, 0.0, 0.5, 0.5);
const Q_BOTTOM_RIGHT: TileRect = TileRect::new(0.5, 0.5, 0.5, 0.5);

const LEFT_HALF: TileRect = TileRect::new(0.0, 0.0, 0.5, 1.0);
const RIGHT_HALF: TileRect = TileRect::new(0.5, 0.0, 0.5, 1.0);
const TOP_HALF: TileRect = TileRect::new(0.0, 0.0, 1.0, 0.5);
const BOTTOM_HALF: TileRect = TileRect::new(0.0, 0.5, 1.0, 0.5);

// Four occupants fill the 2x2 grid column by column in both orientations
// (TL, BL, TR, BR). Older KWin splitscreen scripts fill it row by row
// (TL, TR, BL, BR); changing the order swaps where slots 1 and 2 land.
const GRID: [TileRect; 4] = [Q_TOP_LEFT, Q_BOTTOM_LEFT, Q_TOP_RIGHT, Q_BOTTOM_RIGHT];

static HORIZONTAL: [&[TileRect]; MAX_GROUP_SIZE] = [
    &[TileRect::FULL],
    &[LEFT_HALF, RIGHT_HALF],
    &[LEFT_HALF, Q_TOP_RIGHT, Q_BOTTOM_RIGHT],
    &GRID,
];

static VERTICAL: [&[TileRect]; MAX_GROUP_SIZE] = [
    &[TileRect::FULL],
    &[TOP_HALF, BOTTOM_HALF],
    &[TOP_HALF, Q_BOTTOM_LEFT, Q_BOTTOM_RIGHT],
    &GRID,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOrientation {
    /// Occupants sit side by side
    Horizontal,
    /// Occupants are stacked top to bottom
    Vertical,
}

/// Fixed lookup of tile rectangles keyed by (group size, slot).
#[derive(Debug, Clone, Copy)]
pub struct TileLayoutTable {
    orientation: SplitOrientation,
    rows: &'static [&'static [TileRect]; MAX_GROUP_SIZE],
}

impl TileLayoutTable {
    pub fn new(orientation: SplitOrientation) -> Self {
        let rows = match orientation {
            SplitOrientation::Horizontal => &HORIZONTAL,
            SplitOrientation::Vertical => &VERTICAL,
        };
        debug_assert!(rows.iter().all(|tiles| partitions_unit_square(tiles)));
        Self { orientation, rows }
    }

    pub fn orientation(&self) -> SplitOrientation {
        self.orientation
    }

    /// Tile for the `slot`-th window of a group of `group_size` windows.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= group_size <= 4` and `slot < group_size`. Callers
    /// derive both from the grouping step, so anything else is a bug.
    pub fn rect(&self, group_size: usize, slot: usize) -> TileRect {
        let tiles = self.tiles(group_size);
        assert!(
            slot < group_size,
            "slot {} out of range for group size {}",
            slot,
            group_size
        );
        tiles[slot]
    }

    /// All tiles for one group size, in slot order.
    pub fn tiles(&self, group_size: usize) -> &'static [TileRect] {
        assert!(
            (1..=MAX_GROUP_SIZE).contains(&group_size),
            "group size {} out of range 1..={}",
            group_size,
            MAX_GROUP_SIZE
        );
        self.rows[group_size - 1]
    }
}

/// True when `tiles` cover the unit square with no gaps and no overlaps.
pub fn partitions_unit_square(tiles: &[TileRect]) -> bool {
    const EPSILON: f64 = 1e-9;

    if !tiles.iter().all(TileRect::is_within_unit_square) {
        return false;
    }
    for (i, a) in tiles.iter().enumerate() {
        if tiles[i + 1..].iter().any(|b| a.overlaps(b)) {
            return false;
        }
    }
    // Disjoint tiles inside the square cover it iff their areas sum to 1
    let total: f64 = tiles.iter().map(TileRect::area).sum();
    (total - 1.0).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIENTATIONS: [SplitOrientation; 2] =
        [SplitOrientation::Horizontal, SplitOrientation::Vertical];

    #[test]
    fn test_every_group_size_partitions_the_monitor() {
        for orientation in ORIENTATIONS {
            let table = TileLayoutTable::new(orientation);
            for size in 1..=MAX_GROUP_SIZE {
                let tiles = table.tiles(size);
                assert_eq!(tiles.len(), size);
                assert!(
                    partitions_unit_square(tiles),
                    "{:?} size {} does not tile the monitor",
                    orientation,
                    size
                );
            }
        }
    }

    #[test]
    fn test_single_occupant_is_full() {
        for orientation in ORIENTATIONS {
            assert_eq!(TileLayoutTable::new(orientation).rect(1, 0), TileRect::FULL);
        }
    }

    #[test]
    fn test_horizontal_two_are_columns() {
        let table = TileLayoutTable::new(SplitOrientation::Horizontal);
        assert_eq!(table.rect(2, 0), TileRect::new(0.0, 0.0, 0.5, 1.0));
        assert_eq!(table.rect(2, 1), TileRect::new(0.5, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_vertical_two_are_rows() {
        let table = TileLayoutTable::new(SplitOrientation::Vertical);
        assert_eq!(table.rect(2, 0), TileRect::new(0.0, 0.0, 1.0, 0.5));
        assert_eq!(table.rect(2, 1), TileRect::new(0.0, 0.5, 1.0, 0.5));
    }

    #[test]
    fn test_three_gives_first_slot_a_half() {
        let horizontal = TileLayoutTable::new(SplitOrientation::Horizontal);
        assert_eq!(horizontal.rect(3, 0), TileRect::new(0.0, 0.0, 0.5, 1.0));
        assert_eq!(horizontal.rect(3, 1), TileRect::new(0.5, 0.0, 0.5, 0.5));
        assert_eq!(horizontal.rect(3, 2), TileRect::new(0.5, 0.5, 0.5, 0.5));

        let vertical = TileLayoutTable::new(SplitOrientation::Vertical);
        assert_eq!(vertical.rect(3, 0), TileRect::new(0.0, 0.0, 1.0, 0.5));
        assert_eq!(vertical.rect(3, 1), TileRect::new(0.0, 0.5, 0.5, 0.5));
        assert_eq!(vertical.rect(3, 2), TileRect::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn test_four_share_the_same_grid() {
        let horizontal = TileLayoutTable::new(SplitOrientation::Horizontal);
        let vertical = TileLayoutTable::new(SplitOrientation::Vertical);
        assert_eq!(horizontal.tiles(4), vertical.tiles(4));
        // Column-major: left column first
        assert_eq!(horizontal.rect(4, 1), TileRect::new(0.0, 0.5, 0.5, 0.5));
        assert_eq!(horizontal.rect(4, 2), TileRect::new(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    #[should_panic(expected = "group size 5")]
    fn test_group_size_above_four_panics() {
        TileLayoutTable::new(SplitOrientation::Horizontal).rect(5, 0);
    }

    #[test]
    #[should_panic(expected = "group size 0")]
    fn test_group_size_zero_panics() {
        TileLayoutTable::new(SplitOrientation::Vertical).rect(0, 0);
    }

    #[test]
    #[should_panic(expected = "slot 2 out of range")]
    fn test_slot_outside_group_panics() {
        TileLayoutTable::new(SplitOrientation::Horizontal).rect(2, 2);
    }

    #[test]
    fn test_partition_check_rejects_gaps_and_overlaps() {
        let gap = [TileRect::new(0.0, 0.0, 0.5, 1.0)];
        assert!(!partitions_unit_square(&gap));

        let overlap = [
            TileRect::new(0.0, 0.0, 0.75, 1.0),
            TileRect::new(0.25, 0.0, 0.75, 1.0),
        ];
        assert!(!partitions_unit_square(&overlap));

        let outside = [TileRect::new(0.5, 0.0, 1.0, 1.0)];
        assert!(!partitions_unit_square(&outside));
    }
}
