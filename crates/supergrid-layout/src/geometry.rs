//! Pixel to column conversion.
//!
//! Gestures report pixel offsets relative to the container; the grid works in
//! whole tracks. Everything here is a pure function of the container width.

use supergrid_core::{ColumnSpan, GeometryError, TRACK_COUNT};

/// Slack, in pixels, absorbed at both edges of a resized block so a handle
/// released on a column boundary does not flicker between two widths.
pub const RESIZE_ERROR_MARGIN: f64 = 2.0;

/// Converter for one container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    container_width: f64,
}

impl Geometry {
    pub fn new(container_width: f64) -> Self {
        Self { container_width }
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Columns per pixel.
    fn scale(&self) -> Result<f64, GeometryError> {
        if self.container_width.is_finite() && self.container_width > 0.0 {
            Ok(TRACK_COUNT as f64 / self.container_width)
        } else {
            Err(GeometryError::ZeroContainerWidth {
                width: self.container_width,
            })
        }
    }

    /// Pixel width of a single track.
    pub fn column_width(&self) -> f64 {
        self.container_width.max(0.0) / TRACK_COUNT as f64
    }

    /// Nearest column boundary to a pixel offset, clamped to `0..=TRACK_COUNT`.
    ///
    /// A degenerate container maps everything to column 0.
    pub fn pixels_to_column(&self, px: f64) -> usize {
        let Ok(scale) = self.scale() else {
            return 0;
        };
        ((px * scale).round() as i64).clamp(0, TRACK_COUNT as i64) as usize
    }

    /// Pixel offset of a column boundary.
    pub fn column_to_pixels(&self, column: usize) -> f64 {
        column as f64 * self.column_width()
    }

    /// Column a dragged block of `width` tracks snaps to, kept inside the grid.
    pub fn snap_drag(&self, left: f64, width: usize) -> usize {
        let width = width.clamp(1, TRACK_COUNT);
        self.pixels_to_column(left).min(TRACK_COUNT - width)
    }

    /// Columns covered by a resized pixel box.
    ///
    /// The left edge rounds down and the right edge rounds up, each after
    /// moving [`RESIZE_ERROR_MARGIN`] pixels inward. Spans narrower than
    /// `min_width` are rejected; the caller keeps the pre-resize geometry.
    pub fn span_to_columns(
        &self,
        left: f64,
        width: f64,
        min_width: usize,
    ) -> Result<ColumnSpan, GeometryError> {
        let scale = self.scale()?;
        let start = ((left + RESIZE_ERROR_MARGIN) * scale).floor() as i64;
        let end = ((left + width - RESIZE_ERROR_MARGIN) * scale).ceil() as i64;
        let start = start.clamp(0, TRACK_COUNT as i64);
        let end = end.clamp(0, TRACK_COUNT as i64);

        if end - start < min_width.max(1) as i64 {
            return Err(GeometryError::SpanTooNarrow {
                start,
                end,
                min_width,
            });
        }

        Ok(ColumnSpan::new(start as usize, (end - start) as usize))
    }
}
