//! Vertical placement of the block under an active gesture.

use supergrid_core::{BlockId, BlockSet, ColumnSpan};

/// Row rank the active block needs so that it sorts below every block it
/// visually passed.
///
/// The active block is considered at pixel offset `top` with its current
/// `pixel_height`. Each other block sharing a column with `span` whose
/// vertical midpoint lies at or above the active midpoint pushes the rank to
/// at least `other.y + 1`. A `top` of zero or less always yields rank 0, so
/// dragging to the very top of the grid claims the first slot even when the
/// midpoint test alone would not.
pub fn resolve_rank(
    blocks: &BlockSet,
    active: BlockId,
    span: ColumnSpan,
    top: f64,
    pixel_height: f64,
) -> f64 {
    if top <= 0.0 {
        return 0.0;
    }

    let middle = top + pixel_height * 0.5;
    blocks
        .iter()
        .filter(|other| other.id != active)
        .filter(|other| span.overlaps(&other.span()))
        .filter(|other| middle >= other.pixel_center_y())
        .map(|other| other.y + 1.0)
        .fold(0.0, f64::max)
}
