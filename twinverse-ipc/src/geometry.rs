use serde::{Deserialize, Serialize};

/// Absolute pixel geometry in the host's global coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Parse the `WIDTHxHEIGHT+X+Y` form used by X11 geometry strings.
    /// The offset part is optional and defaults to the origin.
    pub fn parse_geometry(s: &str) -> Option<Self> {
        let (size, offset) = match s.find(['+', '-']) {
            Some(pos) => s.split_at(pos),
            None => (s, ""),
        };
        let (w, h) = size.split_once(['x', 'X'])?;
        let width = w.parse().ok()?;
        let height = h.parse().ok()?;

        let (x, y) = if offset.is_empty() {
            (0, 0)
        } else {
            let rest = &offset[1..];
            let split = rest.find(['+', '-'])? + 1;
            let (xs, ys) = offset.split_at(split);
            (parse_signed(xs)?, parse_signed(ys)?)
        };

        Some(Self::new(x, y, width, height))
    }
}

fn parse_signed(s: &str) -> Option<i32> {
    match s.strip_prefix('+') {
        Some(rest) => rest.parse().ok(),
        None => s.parse().ok(),
    }
}
