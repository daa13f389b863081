//! Geometry value types shared by the layout crate.
//!
//! Pixel coordinates are relative to the grid container's top-left corner.
//! Column coordinates are integer track indices in `0..=TRACK_COUNT`.

/// Number of tracks (columns) in every grid.
pub const TRACK_COUNT: usize = 6;

/// A pixel offset reported by a drag or resize gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub left: f64,
    pub top: f64,
}

impl PixelPoint {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Create a rectangle from position and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.left, self.top)
    }

}

/// A contiguous run of columns `start..start + width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnSpan {
    pub start: usize,
    pub width: usize,
}

impl ColumnSpan {
    pub fn new(start: usize, width: usize) -> Self {
        Self { start, width }
    }

    /// One past the last covered column.
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    /// Whether the two spans share at least one column.
    pub fn overlaps(&self, other: &ColumnSpan) -> bool {
        self.end() > other.start && self.start < other.end()
    }

    /// Column indices covered by the span.
    pub fn columns(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }

    /// Clamp into the grid: width to `1..=TRACK_COUNT`, then start so the span
    /// ends at or before the last track.
    pub fn clamped(start: i64, width: i64) -> Self {
        let width = width.clamp(1, TRACK_COUNT as i64) as usize;
        let start = start.clamp(0, (TRACK_COUNT - width) as i64) as usize;
        Self { start, width }
    }
}
