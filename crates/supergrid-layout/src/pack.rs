//! Greedy compaction.

use supergrid_core::{BlockId, BlockSet, ColumnSpan, TRACK_COUNT};

use crate::strategy::{priority_order, Skyline};

/// Lowest slot for a block `width` columns wide; ties go to the leftmost.
fn lowest_slot(bottoms: &Skyline, width: usize) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for start in 0..=TRACK_COUNT - width {
        let top = bottoms.top(ColumnSpan::new(start, width));
        if top < best.1 {
            best = (start, top);
        }
    }
    best
}

/// Move every block, in priority order, to the lowest then leftmost slot
/// that fits it. `x`, `y` (set to the pixel top), and `pixel_y` are
/// rewritten; the caller runs a layout pass afterwards.
///
/// Returns the packed container height.
pub fn pack_blocks(blocks: &mut BlockSet, active: Option<BlockId>) -> f64 {
    let mut bottoms = Skyline::new();

    for id in priority_order(blocks, active) {
        let Some(block) = blocks.get_mut(id) else {
            continue;
        };
        block.clamp_to_grid();

        let (x, top) = lowest_slot(&bottoms, block.width);
        block.x = x;
        block.y = top;
        block.pixel_y = top;
        bottoms.settle(block.span(), block.pixel_bottom());
    }

    bottoms.highest()
}
